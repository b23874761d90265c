use phish_drill::analyzer::IndicatorAnalyzer;
use phish_drill::highlight::TextHighlighter;
use phish_drill::message::EmailMessage;

fn main() {
    env_logger::init();

    println!("Testing highlight markup against analyzer output...");
    let analyzer = IndicatorAnalyzer::default();
    let highlighter = TextHighlighter::new(analyzer.config());
    let mut failures = 0;

    let email = EmailMessage::new(
        "URGENT: Verificați contul!!!",
        "Acționați acum: accesați http://bit.ly/secure-check și introduceți parola dvs.",
    );
    let result = analyzer.analyze(&email, "Fraudă bancară");
    let marked = highlighter.highlight(&email.body, &result.findings);
    println!("\nMarked-up body:\n{marked}");

    let checks: [(&str, bool); 4] = [
        (
            "URL wrapped with rationale tooltip",
            marked.contains(">http://bit.ly/secure-check</span>") && marked.contains("URL suspect:"),
        ),
        (
            "urgency word wrapped",
            marked.contains(">acum</span>"),
        ),
        (
            "sensitive phrase wrapped once",
            marked.contains(">introduceți parola</span>"),
        ),
        (
            "exactly three balanced spans",
            marked.matches("<span").count() == 3
                && marked.matches("</span>").count() == 3,
        ),
    ];
    for (label, ok) in checks {
        if ok {
            println!("✅ {label}");
        } else {
            println!("❌ {label}");
            failures += 1;
        }
    }

    // A clean text with no findings must come back byte-identical.
    let clean = "Vă mulțumim pentru plata efectuată la timp.";
    let untouched = highlighter.highlight(clean, &[]);
    if untouched == clean {
        println!("✅ Clean text returned unchanged");
    } else {
        println!("❌ Clean text was modified: {untouched}");
        failures += 1;
    }

    // Overlap handling: a URL containing urgency words must stay one span.
    let email = EmailMessage::new(
        "Alertă urgentă",
        "Vezi http://urgent-acum.bit.ly/x imediat",
    );
    let result = analyzer.analyze(&email, "");
    let marked = highlighter.highlight(&email.body, &result.findings);
    println!("\nOverlap case:\n{marked}");
    let url_spans = marked.matches("<span").count();
    // One span for the URL, one for the trailing "imediat".
    if url_spans == 2 && marked.contains(">http://urgent-acum.bit.ly/x</span>") {
        println!("✅ URL span not corrupted by the urgency pass");
    } else {
        println!("❌ Unexpected span layout ({url_spans} spans)");
        failures += 1;
    }

    println!();
    if failures == 0 {
        println!("✅ All highlight markup checks passed");
    } else {
        println!("❌ {failures} check(s) failed");
        std::process::exit(1);
    }
}
