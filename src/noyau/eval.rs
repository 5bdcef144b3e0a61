//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> évaluation f64 sur espace de noms restreint
//!
//! L'espace de noms est FERMÉ : constantes pi/e/tau, fonctions de la table
//! ci-dessous, rien d'autre. Tout identifiant hors table fait échouer
//! l'évaluation (c'est ce qui rend inoffensif le texte "Error" réinjecté
//! dans l'affichage après un échec).
//!
//! Échec uniforme : syntaxe invalide, parenthèses non fermées, division par
//! zéro, domaine (sqrt(-1), asin(2), log(0)...), factorielle non entière,
//! débordement — tous remontent en Err(String) sans distinction pour
//! l'appelant (le moteur affichera "Error").

use super::jetons::{tokenize, Tok};
use super::rpn::to_rpn;
use super::trig::{AdaptateurTrig, ModeAngle};

/// Table des fonctions reconnues (nom, arité).
/// "log" est le logarithme népérien (le bouton "ln" insère "log(").
const FONCTIONS: [(&str, usize); 13] = [
    ("sqrt", 1),
    ("exp", 1),
    ("log", 1),
    ("log2", 1),
    ("log10", 1),
    ("fact", 1),
    ("gcd", 2),
    ("sin", 1),
    ("cos", 1),
    ("tan", 1),
    ("asin", 1),
    ("acos", 1),
    ("atan", 1),
];

pub fn est_fonction(name: &str) -> bool {
    FONCTIONS.iter().any(|(n, _)| *n == name)
}

fn arite(name: &str) -> usize {
    FONCTIONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, a)| *a)
        .unwrap_or(1)
}

fn constante(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        "tau" => Some(std::f64::consts::TAU),
        _ => None,
    }
}

/// API publique : évalue le texte de l'affichage.
/// `mode` est lu à CE moment-là (jamais mémorisé à la saisie).
pub fn evaluer(texte: &str, mode: ModeAngle) -> Result<f64, String> {
    let s = texte.trim();
    if s.is_empty() {
        return Err("entrée vide".into());
    }

    let jetons = tokenize(s)?;
    let rpn = to_rpn(&jetons)?;
    eval_rpn(&rpn, AdaptateurTrig::new(mode))
}

/// Évalue une RPN sur une pile de f64.
fn eval_rpn(rpn: &[Tok], trig: AdaptateurTrig) -> Result<f64, String> {
    let mut pile: Vec<f64> = Vec::new();

    for tok in rpn {
        let v = match tok {
            Tok::Num(n) => *n,

            Tok::Ident(name) if est_fonction(name) => {
                let n = arite(name);
                if pile.len() < n {
                    return Err(format!("fonction '{name}' sans assez d'arguments"));
                }
                let args: Vec<f64> = pile.split_off(pile.len() - n);
                applique_fonction(name, &args, trig)?
            }

            Tok::Ident(name) => {
                constante(name).ok_or_else(|| format!("nom inconnu: '{name}'"))?
            }

            Tok::Neg => {
                let a = pile.pop().ok_or("expression invalide")?;
                -a
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent
            | Tok::SlashSlash | Tok::StarStar => {
                let b = pile.pop().ok_or("expression invalide")?;
                let a = pile.pop().ok_or("expression invalide")?;
                applique_operateur(tok, a, b)?
            }

            Tok::Virgule | Tok::LPar | Tok::RPar => {
                return Err("jeton inattendu en RPN".into())
            }
        };

        // échec uniforme : NaN/inf (domaine, débordement, tan(π/2) reste fini)
        if !v.is_finite() {
            return Err("résultat non fini".into());
        }
        pile.push(v);
    }

    if pile.len() != 1 {
        return Err("expression invalide".into());
    }
    Ok(pile.pop().unwrap())
}

fn applique_operateur(op: &Tok, a: f64, b: f64) -> Result<f64, String> {
    let v = match op {
        Tok::Plus => a + b,
        Tok::Minus => a - b,
        Tok::Star => a * b,
        Tok::Slash => {
            if b == 0.0 {
                return Err("division par zéro".into());
            }
            a / b
        }
        // modulo "plancher" (sémantique de l'hôte d'origine : -7 % 3 = 2)
        Tok::Percent => {
            if b == 0.0 {
                return Err("modulo par zéro".into());
            }
            a - b * (a / b).floor()
        }
        // division entière "plancher"
        Tok::SlashSlash => {
            if b == 0.0 {
                return Err("division entière par zéro".into());
            }
            (a / b).floor()
        }
        Tok::StarStar => a.powf(b),
        _ => unreachable!(),
    };
    Ok(v)
}

fn applique_fonction(name: &str, args: &[f64], trig: AdaptateurTrig) -> Result<f64, String> {
    let x = args[0];

    let v = match name {
        "sqrt" => x.sqrt(),
        "exp" => x.exp(),
        "log" => x.ln(),
        "log2" => x.log2(),
        "log10" => x.log10(),
        "fact" => factorielle(x)?,
        "gcd" => pgcd(args[0], args[1])?,

        "sin" => trig.sin(x),
        "cos" => trig.cos(x),
        "tan" => trig.tan(x),
        "asin" => trig.asin(x),
        "acos" => trig.acos(x),
        "atan" => trig.atan(x),

        _ => unreachable!(),
    };
    Ok(v)
}

/// Factorielle : entier >= 0 seulement. Au-delà de 170, f64 déborde
/// (pas de précision arbitraire dans ce noyau) => refus.
fn factorielle(x: f64) -> Result<f64, String> {
    if x < 0.0 || x.fract() != 0.0 {
        return Err("factorielle d'un non-entier ou d'un négatif".into());
    }
    if x > 170.0 {
        return Err("factorielle trop grande".into());
    }

    let mut acc = 1.0f64;
    let mut k = 2.0f64;
    while k <= x {
        acc *= k;
        k += 1.0;
    }
    Ok(acc)
}

/// PGCD : entiers seulement (valeur absolue, comme l'hôte d'origine).
fn pgcd(a: f64, b: f64) -> Result<f64, String> {
    if a.fract() != 0.0 || b.fract() != 0.0 {
        return Err("gcd demande des entiers".into());
    }
    if a.abs() > 9e15 || b.abs() > 9e15 {
        return Err("gcd hors bornes".into());
    }

    let mut m = (a.abs()) as i64;
    let mut n = (b.abs()) as i64;
    while n != 0 {
        let t = m % n;
        m = n;
        n = t;
    }
    Ok(m as f64)
}
