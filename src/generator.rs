use crate::message::EmailMessage;
use chrono::Local;
use rand::rngs::StdRng;
use rand::Rng;

/// Template theme for generated training mail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Banking,
    Ecommerce,
}

impl Theme {
    /// Unknown names fall back to the banking theme.
    pub fn parse(name: &str) -> Theme {
        match name.to_lowercase().as_str() {
            "banking" => Theme::Banking,
            "ecommerce" => Theme::Ecommerce,
            other => {
                log::debug!("Unknown template theme '{other}', using banking");
                Theme::Banking
            }
        }
    }

    /// Scenario category the phishing variant belongs to, so generated mail
    /// feeds straight into category-specific advice.
    pub fn phishing_category(&self) -> &'static str {
        match self {
            Theme::Banking => "Fraudă bancară",
            Theme::Ecommerce => "Notificare livrare",
        }
    }
}

struct TemplateSet {
    sender_name: &'static str,
    sender_address: &'static str,
    subjects: &'static [&'static str],
    bodies: &'static [&'static str],
}

const BANKING_LEGITIMATE: TemplateSet = TemplateSet {
    sender_name: "Banca Transilvania",
    sender_address: "notificari@bancatransilvania.ro",
    subjects: &[
        "Confirmare tranzacție #{{transaction_id}}",
        "Informare: Modificări în termenii și condițiile contului dvs.",
        "Extras de cont - perioada {{month}}",
    ],
    bodies: &[r#"Stimate client,

Vă informăm că s-a înregistrat o tranzacție în valoare de {{amount}} RON de pe cardul dvs. cu terminația {{card_last_4}} în data de {{date}}.

Dacă nu recunoașteți această tranzacție, vă rugăm să contactați serviciul de Asistență Clienți la numărul 0800 80 CARD (2273), disponibil non-stop.

Puteți verifica toate tranzacțiile în aplicația BT24 sau în orice sucursală Banca Transilvania.

Pentru orice alte informații, vă stăm la dispoziție.

Cu stimă,
Echipa Banca Transilvania

-------
Acest email este generat automat. Vă rugăm să nu răspundeți la această adresă.
Pentru confidențialitatea dvs., nu includem link-uri în notificările de tranzacții.
"#],
};

// Sender carries a subtle typo and an off-brand domain on purpose.
const BANKING_PHISHING: TemplateSet = TemplateSet {
    sender_name: "Banca Translivania",
    sender_address: "notificari@bancatranslivania-secure.com",
    subjects: &[
        "URGENT: Suspiciune fraudă pe contul dvs. #{{account_id}}",
        "Actualizare de securitate necesară - acționați acum",
        "Cont restricționat - Verificare necesară",
    ],
    bodies: &[r#"Stimate client,

Am detectat o activitate suspectă pe contul dumneavoastră în data de {{date}}. Pentru siguranța fondurilor dvs., anumite funcționalități au fost temporar restricționate.

Pentru a restabili accesul complet la contul dvs., vă rugăm să verificați identitatea accesând portalul nostru securizat:

➤ [Verificare Securitate](http://verificare-bt.online-secure.com/auth)

În cazul în care nu efectuați verificarea în termen de 24 de ore, contul dvs. va fi suspendat conform politicilor de securitate.

Vă mulțumim pentru înțelegere,
Departamentul de Securitate
Banca Translivania

-------
Acest email este confidențial. Vă rugăm să nu distribuiți acest mesaj.
"#],
};

const ECOMMERCE_LEGITIMATE: TemplateSet = TemplateSet {
    sender_name: "eMAG",
    sender_address: "info@emag.ro",
    subjects: &[
        "Comanda #{{order_id}} a fost confirmată",
        "Factură pentru comanda #{{order_id}}",
        "Urmărește livrarea comenzii #{{order_id}}",
    ],
    bodies: &[r#"Salut {{name}},

Îți mulțumim pentru comanda ta #{{order_id}}!

Detalii comandă:
* Data: {{date}}
* Produse: {{product_list}}
* Valoare totală: {{amount}} RON
* Adresa de livrare: {{address}}
* Metoda de plată: {{payment_method}}

Comanda ta este în curs de procesare și va fi expediată în următoarele 24 de ore.

Poți urmări statusul comenzii tale în contul tău eMAG, secțiunea "Comenzile mele".

Pentru orice întrebări legate de comandă, te rugăm să contactezi departamentul Relații Clienți la numărul 0722.100.123 sau prin email la help@emag.ro.

Cu stimă,
Echipa eMAG

-------
SC Dante International SA
www.emag.ro
"#],
};

const ECOMMERCE_PHISHING: TemplateSet = TemplateSet {
    sender_name: "eMAG Servicii Clienți",
    sender_address: "support@emag-delivery.info",
    subjects: &[
        "URGENT: Problemă cu livrarea comenzii #{{order_id}}",
        "Actualizare necesară pentru livrarea comenzii dvs.",
        "Confirmare adresă pentru livrarea pachetului",
    ],
    bodies: &[r#"Dragă client,

Vă informăm că pachetul dumneavoastră cu numărul de comandă #{{order_id}} nu a putut fi livrat din cauza unor informații incomplete.

Pentru a evita returnarea pachetului la depozit, vă rugăm să confirmați urgent adresa de livrare și detaliile de contact accesând link-ul de mai jos:

➤ [Confirmare Adresă Livrare](http://emag-delivery.info/confirm/{{order_id}})

Notă: Pentru a vă verifica identitatea, veți fi rugat să furnizați câteva informații de securitate.

Dacă nu confirmați adresa în 48 de ore, pachetul va fi returnat la expeditor și veți fi taxat cu costurile de retur.

Cu stimă,
Echipa de Livrări eMAG

-------
Răspundeți rapid pentru a evita întârzieri suplimentare!
"#],
};

pub struct EmailGenerator;

impl EmailGenerator {
    /// Build one training email from the canned templates, with randomized
    /// transaction values and today's date filled into the placeholders.
    pub fn generate(theme: Theme, phishing: bool, rng: &mut StdRng) -> EmailMessage {
        let set = match (theme, phishing) {
            (Theme::Banking, false) => &BANKING_LEGITIMATE,
            (Theme::Banking, true) => &BANKING_PHISHING,
            (Theme::Ecommerce, false) => &ECOMMERCE_LEGITIMATE,
            (Theme::Ecommerce, true) => &ECOMMERCE_PHISHING,
        };

        let variables = Self::variables(rng);
        let subject = set.subjects[rng.gen_range(0..set.subjects.len())];
        let body = set.bodies[rng.gen_range(0..set.bodies.len())];

        EmailMessage {
            subject: fill_placeholders(subject, &variables),
            body: fill_placeholders(body, &variables),
            sender: Some(set.sender_name.to_string()),
            sender_address: Some(set.sender_address.to_string()),
            category: phishing.then(|| theme.phishing_category().to_string()),
        }
    }

    fn variables(rng: &mut StdRng) -> Vec<(&'static str, String)> {
        let payment_methods = ["Card", "Ramburs", "Transfer bancar"];
        let now = Local::now();

        vec![
            ("transaction_id", format!("TX{}", rng.gen_range(10000..=99999))),
            ("order_id", rng.gen_range(100000..=999999).to_string()),
            ("account_id", format!("*****{}", rng.gen_range(1000..=9999))),
            ("card_last_4", rng.gen_range(1000..=9999).to_string()),
            (
                "amount",
                format!("{}.{:02}", rng.gen_range(50..=5000), rng.gen_range(0..=99)),
            ),
            ("date", now.format("%d.%m.%Y").to_string()),
            ("month", now.format("%B %Y").to_string()),
            ("name", "Alexandru Popescu".to_string()),
            (
                "product_list",
                "Laptop ASUS, Mouse wireless, Căști audio".to_string(),
            ),
            ("address", "Strada Exemplu, nr. 123, București".to_string()),
            (
                "payment_method",
                payment_methods[rng.gen_range(0..payment_methods.len())].to_string(),
            ),
        ]
    }
}

fn fill_placeholders(template: &str, variables: &[(&str, String)]) -> String {
    let mut text = template.to_string();
    for (key, value) in variables {
        text = text.replace(&format!("{{{{{key}}}}}"), value);
    }
    text
}
