use clap::{Arg, Command};
use log::LevelFilter;
use phish_drill::analyzer::{AnalysisResult, IndicatorAnalyzer};
use phish_drill::catalog::Catalog;
use phish_drill::config::AnalyzerConfig;
use phish_drill::generator::{EmailGenerator, Theme};
use phish_drill::highlight::TextHighlighter;
use phish_drill::message::EmailMessage;
use phish_drill::session::QuizSession;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};
use std::process;

fn main() {
    let matches = Command::new("phish-drill")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Phishing-awareness trainer: indicator analysis, highlighting and terminal quiz")
        .arg(
            Arg::new("catalog")
                .short('c')
                .long("catalog")
                .value_name("FILE")
                .help("Scenario catalog file (JSON)")
                .default_value("examples.json"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Analyzer vocabulary configuration file (YAML)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("analyze")
                .long("analyze")
                .value_name("FILE")
                .help("Analyze a plain-text email file and print the findings report")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .value_name("NAME")
                .help("Scenario category for --analyze (overrides a Category: header)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("show-highlights")
                .long("show-highlights")
                .help("With --analyze, also print the body with indicator markup")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("report-json")
                .long("report-json")
                .value_name("FILE")
                .help("Write the analysis or quiz report as JSON")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("validate-catalog")
                .long("validate-catalog")
                .help("Validate the scenario catalog and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("generate-catalog")
                .long("generate-catalog")
                .value_name("FILE")
                .help("Write the built-in scenario catalog as JSON")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("generate-email")
                .long("generate-email")
                .value_name("THEME")
                .help("Generate a legitimate/phishing training pair (banking, ecommerce)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("demo")
                .long("demo")
                .help("Analyze every phishing email in the catalog (no interaction)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiz")
                .long("quiz")
                .help("Run the interactive terminal quiz")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .help("Fix the RNG seed (quiz and email generation)")
                .value_parser(clap::value_parser!(u64))
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let config = match matches.get_one::<String>("config") {
        Some(path) => match AnalyzerConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading analyzer config: {e:#}");
                process::exit(1);
            }
        },
        None => AnalyzerConfig::default(),
    };
    let analyzer = IndicatorAnalyzer::new(config);

    if let Some(path) = matches.get_one::<String>("generate-catalog") {
        let catalog = Catalog::builtin();
        if let Err(e) = catalog.to_file(path) {
            eprintln!("Error writing catalog: {e:#}");
            process::exit(1);
        }
        println!("✅ Wrote {} scenarios to {path}", catalog.len());
        return;
    }

    let catalog_path = matches.get_one::<String>("catalog").unwrap();

    if matches.get_flag("validate-catalog") {
        validate_catalog(catalog_path);
        return;
    }

    if let Some(email_file) = matches.get_one::<String>("analyze") {
        analyze_file(&matches, &analyzer, email_file);
        return;
    }

    if let Some(theme) = matches.get_one::<String>("generate-email") {
        generate_pair(&matches, &analyzer, theme);
        return;
    }

    if matches.get_flag("demo") {
        run_demo(&analyzer, catalog_path);
        return;
    }

    if matches.get_flag("quiz") {
        run_quiz(&matches, analyzer, catalog_path);
        return;
    }

    eprintln!("No mode selected. Try --analyze, --quiz, --demo or --help.");
    process::exit(1);
}

fn validate_catalog(path: &str) {
    println!("🔍 Validating catalog {path}...");
    let catalog = match Catalog::from_file(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            println!("❌ Failed to load catalog: {e:#}");
            process::exit(1);
        }
    };
    match catalog.validate() {
        Ok(()) => {
            println!("Number of scenarios: {}", catalog.len());
            for scenario in &catalog.scenarios {
                println!("  • {}", scenario.category);
            }
            println!("✅ Catalog is valid");
        }
        Err(e) => {
            println!("❌ Catalog validation failed: {e:#}");
            process::exit(1);
        }
    }
}

fn analyze_file(matches: &clap::ArgMatches, analyzer: &IndicatorAnalyzer, email_file: &str) {
    let text = match std::fs::read_to_string(email_file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading {email_file}: {e}");
            process::exit(1);
        }
    };

    let email = EmailMessage::from_plain_text(&text);
    let category = matches
        .get_one::<String>("category")
        .cloned()
        .or_else(|| email.category.clone())
        .unwrap_or_default();

    let result = analyzer.analyze(&email, &category);
    print_analysis(&email, &result);

    if matches.get_flag("show-highlights") {
        let highlighter = TextHighlighter::new(analyzer.config());
        println!();
        println!("Highlighted body:");
        println!("{}", highlighter.highlight(&email.body, &result.findings));
    }

    if let Some(path) = matches.get_one::<String>("report-json") {
        if let Err(e) = write_json(path, &result) {
            eprintln!("Error writing report: {e:#}");
            process::exit(1);
        }
        println!();
        println!("Report written to {path}");
    }
}

fn print_analysis(email: &EmailMessage, result: &AnalysisResult) {
    println!("📧 Subject: {}", email.subject);
    if let Some(sender) = &email.sender {
        println!("   From: {sender}");
    }
    println!();
    println!(
        "Risk score: {} ({})",
        result.total_risk_score,
        result.risk_level()
    );
    let primary = result
        .primary_risk
        .map(|kind| kind.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    println!("Primary risk: {primary}");
    println!();

    if result.findings.is_empty() {
        println!("No indicators detected.");
        return;
    }
    println!("Findings ({}):", result.findings.len());
    for finding in &result.findings {
        println!("  [{}] {}", finding.severity, finding.kind);
        println!("      {}", finding.rationale);
        if !finding.matched_text.is_empty() {
            println!("      Matched: {}", finding.matched_text);
        }
    }
}

fn generate_pair(matches: &clap::ArgMatches, analyzer: &IndicatorAnalyzer, theme_name: &str) {
    let theme = Theme::parse(theme_name);
    let mut rng = match matches.get_one::<u64>("seed") {
        Some(&seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let legitimate = EmailGenerator::generate(theme, false, &mut rng);
    let phishing = EmailGenerator::generate(theme, true, &mut rng);

    println!("═══ Legitimate ═══");
    print_generated(&legitimate);
    println!();
    println!("═══ Phishing ═══");
    print_generated(&phishing);
    println!();

    let category = phishing.category.clone().unwrap_or_default();
    let result = analyzer.analyze(&phishing, &category);
    print_analysis(&phishing, &result);
}

fn print_generated(email: &EmailMessage) {
    if let (Some(sender), Some(address)) = (&email.sender, &email.sender_address) {
        println!("From: {sender} <{address}>");
    }
    println!("Subject: {}", email.subject);
    println!();
    println!("{}", email.body);
}

fn run_demo(analyzer: &IndicatorAnalyzer, catalog_path: &str) {
    let catalog = Catalog::load_or_builtin(catalog_path);
    println!("📊 Analyzing {} phishing scenarios", catalog.len());
    println!("═══════════════════════════════════════");
    for scenario in &catalog.scenarios {
        let result = analyzer.analyze(&scenario.fake_message(), &scenario.category);
        let primary = result
            .primary_risk
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "  {}: score {} ({}), primary risk {primary}, {} finding(s)",
            scenario.category,
            result.total_risk_score,
            result.risk_level(),
            result.findings.len()
        );
    }
}

fn run_quiz(matches: &clap::ArgMatches, analyzer: IndicatorAnalyzer, catalog_path: &str) {
    let catalog = Catalog::load_or_builtin(catalog_path);
    let rng = match matches.get_one::<u64>("seed") {
        Some(&seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = QuizSession::new(catalog, analyzer, rng);
    let stdin = std::io::stdin();
    let mut round_number = 0;

    while let Some(view) = session.next_round() {
        round_number += 1;
        println!();
        println!("─── Round {round_number}: {} ───", view.category);
        for (slot, email) in view.emails.iter().enumerate() {
            println!();
            println!("[{}] Subject: {}", slot + 1, email.subject);
            for line in email.body.lines() {
                println!("    {line}");
            }
        }
        println!();

        let choice = loop {
            print!("Which email is the phishing one? (1/2): ");
            if std::io::stdout().flush().is_err() {
                process::exit(1);
            }
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => {
                    println!();
                    println!("Input closed, ending session early.");
                    print_report(&session, matches);
                    return;
                }
                Ok(_) => {}
                Err(e) => {
                    eprintln!("Error reading input: {e}");
                    process::exit(1);
                }
            }
            match line.trim() {
                "1" => break 0,
                "2" => break 1,
                other => println!("Please answer 1 or 2, not '{other}'."),
            }
        };

        match session.submit(choice) {
            Ok(outcome) => {
                if outcome.correct {
                    println!(
                        "✅ Correct! The phishing email was [{}].",
                        outcome.phish_slot + 1
                    );
                } else {
                    println!(
                        "❌ Wrong. The phishing email was [{}].",
                        outcome.phish_slot + 1
                    );
                }
                println!("   {}", outcome.explanation);
                if let Some(primary) = outcome.analysis.primary_risk {
                    println!(
                        "   Risk score {}, primary risk: {primary}",
                        outcome.analysis.total_risk_score
                    );
                }
            }
            Err(e) => {
                eprintln!("Error recording answer: {e:#}");
                process::exit(1);
            }
        }
    }

    print_report(&session, matches);
}

fn print_report(session: &QuizSession, matches: &clap::ArgMatches) {
    let report = session.report();
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "Final score: {}/{} ({:.0}%)",
        report.score, report.total, report.accuracy_percent
    );
    if !report.missed_categories.is_empty() {
        println!("Categories to review:");
        for category in &report.missed_categories {
            println!("  • {category}");
        }
    }

    if let Some(path) = matches.get_one::<String>("report-json") {
        if let Err(e) = write_json(path, &report) {
            eprintln!("Error writing report: {e:#}");
            process::exit(1);
        }
        println!("Report written to {path}");
    }
}

fn write_json<T: serde::Serialize>(path: &str, value: &T) -> anyhow::Result<()> {
    use anyhow::Context;
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {path}"))?;
    Ok(())
}
