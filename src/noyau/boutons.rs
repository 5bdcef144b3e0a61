// src/noyau/boutons.rs
//
// Classification des boutons
// --------------------------
// Chaque appui arrive comme un texte d'étiquette (vocabulaire fixe des
// pavés) et devient un Bouton : c'est lui que le moteur interprète.
// La cible de l'ajout fait partie de la classification :
// - Litteral / Prefixe / Fonction s'ajoutent au tampon VIDÉ ("0" -> "")
// - Point / OpBinaire / puissances s'ajoutent à l'affichage TEL QUEL
//   (l'opérande gauche, y compris le "0" initial, est conservé)

/// Fonctions unaires insérables par un seul bouton (étiquette = nom).
pub const FUNCS: [&str; 10] = [
    "exp", "log2", "log10", "sin", "cos", "tan", "asin", "acos", "atan", "gcd",
];

#[derive(Clone, Debug, PartialEq)]
pub enum Bouton {
    /// Chiffres, parenthèses, tout texte ajouté tel quel au tampon vidé.
    Litteral(String),
    /// "." : ajouté à l'affichage non vidé ("0" + "." -> "0.").
    Point,
    /// "+", "-", "*", "/", "%" (mod), "//" (div) : texte d'opérateur
    /// ajouté à l'affichage non vidé.
    OpBinaire(&'static str),
    /// x² : ajoute "**2" à l'affichage non vidé.
    PuissanceCarre,
    /// xʸ : ajoute "**" à l'affichage non vidé.
    PuissanceGenerale,
    /// √, 1/x, π, !, ln : texte préfixe ajouté au tampon vidé.
    Prefixe(&'static str),
    /// FUNCS : ajoute "nom(" au tampon vidé. Rien ne ferme la parenthèse
    /// automatiquement, c'est l'évaluateur qui tranchera.
    Fonction(String),
    Signe,
    Egal,
    Clear,
    Retour,
    /// "func" : montrer le pavé des fonctions (signal vue, pas d'affichage).
    PaveFonctions,
    /// "Back" : revenir au pavé principal.
    PaveRetour,
}

/// Classifie une étiquette de bouton.
/// Toute étiquette inconnue est un littéral (branche par défaut du
/// programme d'origine : chiffres, parenthèses...).
pub fn classe(label: &str) -> Bouton {
    match label {
        "=" => Bouton::Egal,
        "C" => Bouton::Clear,
        "\u{21d0}" => Bouton::Retour, // ⇐
        "+/-" => Bouton::Signe,
        "func" => Bouton::PaveFonctions,
        "Back" => Bouton::PaveRetour,

        "." => Bouton::Point,

        "+" => Bouton::OpBinaire("+"),
        "-" => Bouton::OpBinaire("-"),
        "*" => Bouton::OpBinaire("*"),
        "/" => Bouton::OpBinaire("/"),
        "mod" => Bouton::OpBinaire("%"),
        "div" => Bouton::OpBinaire("//"),

        "x²" => Bouton::PuissanceCarre,
        "xʸ" => Bouton::PuissanceGenerale,

        "\u{221a}" => Bouton::Prefixe("sqrt("), // √
        "1/x" => Bouton::Prefixe("1/"),
        "\u{3c0}" => Bouton::Prefixe("pi"), // π
        "!" => Bouton::Prefixe("fact("),
        "ln" => Bouton::Prefixe("log("),

        _ if FUNCS.contains(&label) => Bouton::Fonction(label.to_string()),

        _ => Bouton::Litteral(label.to_string()),
    }
}
