//! Tests de propriétés (campagne) : invariants du moteur + cohérence
//! moteur/évaluateur/formateur sur des suites d'appuis réalistes.
//!
//! Notes (aligné avec l'état actuel du noyau) :
//! - Le tampon n'est JAMAIS vide : "0" est la forme de repos.
//! - "=" raté laisse "Error" dans le tampon et la saisie continue dessus
//!   (hérité, voulu). On vérifie que rien ne panique dans cet état.
//! - La troncature à 80 est un invariant d'APRÈS interprétation, quel que
//!   soit l'ordre des boutons.

use super::boutons::classe;
use super::conversion::convertit;
use super::format::format_resultat;
use super::moteur::{Moteur, LONGUEUR_MAX};
use super::trig::ModeAngle;
use super::evaluer;

fn appuie_tout(m: &mut Moteur, labels: &[&str], mode: ModeAngle) {
    for l in labels {
        m.interprete(&classe(l), mode);
    }
}

fn affiche(labels: &[&str]) -> String {
    let mut m = Moteur::new();
    appuie_tout(&mut m, labels, ModeAngle::Radians);
    m.affichage().to_string()
}

/* ------------------------ Invariants du tampon ------------------------ */

#[test]
fn prop_suite_de_chiffres_rejouee_telle_quelle() {
    // toute suite de chiffres (<= 80, sans zéro de tête : le "0" de repos
    // s'efface devant la saisie) depuis "0" s'affiche telle quelle
    let pleine = "9".repeat(80);
    let suites = ["1", "42", "705", "123456789", pleine.as_str()];
    for s in suites {
        let labels: Vec<String> = s.chars().map(|c| c.to_string()).collect();
        let refs: Vec<&str> = labels.iter().map(|s| s.as_str()).collect();
        assert_eq!(affiche(&refs), s, "suite={s:?}");
    }
}

#[test]
fn prop_jamais_vide_jamais_plus_de_80() {
    // un échantillon de boutons mélangés, rejoué en rafale
    let vocabulaire = [
        "7", "3", "+", "*", ".", "sin", "√", "π", "!", "x²", "xʸ", "mod", "div", "=",
        "⇐", "+/-", "(", ")", "1/x", "ln", "gcd", "C",
    ];
    let mut m = Moteur::new();
    for i in 0..300 {
        let label = vocabulaire[(i * 7 + 3) % vocabulaire.len()];
        m.interprete(&classe(label), ModeAngle::Degres);

        let a = m.affichage();
        assert!(!a.is_empty(), "tampon vide après {label:?} (étape {i})");
        assert!(
            a.chars().count() <= LONGUEUR_MAX,
            "tampon trop long après {label:?} (étape {i}): {a:?}"
        );
    }
}

#[test]
fn prop_retour_arriere_ne_vide_jamais() {
    let mut m = Moteur::new();
    appuie_tout(&mut m, &["4", "2"], ModeAngle::Radians);
    for _ in 0..10 {
        m.interprete(&classe("⇐"), ModeAngle::Radians);
        assert!(!m.affichage().is_empty());
    }
    assert_eq!(m.affichage(), "0");
}

#[test]
fn prop_signe_idempotent_en_paires() {
    // deux +/- consécutifs ramènent exactement l'affichage de départ
    let departs: [&[&str]; 4] = [&[], &["5"], &["1", "2", "."], &["sin", "4"]];
    for labels in departs {
        let mut m = Moteur::new();
        appuie_tout(&mut m, labels, ModeAngle::Radians);
        let avant = m.affichage().to_string();

        appuie_tout(&mut m, &["+/-", "+/-"], ModeAngle::Radians);
        assert_eq!(m.affichage(), avant, "départ={labels:?}");
    }
}

#[test]
fn prop_signe_idempotent_meme_tampon_plein() {
    // cas limite de la propriété : à 80 caractères le "-" ne rentre plus,
    // la paire doit quand même rendre l'affichage de départ (sans perdre
    // le dernier chiffre dans la troncature)
    let mut m = Moteur::new();
    for _ in 0..LONGUEUR_MAX {
        m.interprete(&classe("9"), ModeAngle::Radians);
    }
    let avant = m.affichage().to_string();
    assert_eq!(avant.chars().count(), LONGUEUR_MAX);

    appuie_tout(&mut m, &["+/-", "+/-"], ModeAngle::Radians);
    assert_eq!(m.affichage(), avant);
}

/* ------------------------ Évaluation + format ------------------------ */

#[test]
fn prop_eval_format_reference() {
    assert_eq!(format_resultat(evaluer("2+2", ModeAngle::Radians).unwrap()), "4");
    assert_eq!(
        format_resultat(evaluer("10/4", ModeAngle::Radians).unwrap()),
        "2.5"
    );
}

#[test]
fn prop_sqrt_negatif_echoue() {
    assert!(evaluer("sqrt(-1)", ModeAngle::Radians).is_err());
    assert!(evaluer("sqrt(-1)", ModeAngle::Degres).is_err());
}

#[test]
fn prop_sin_selon_unite() {
    let deg = evaluer("sin(90)", ModeAngle::Degres).unwrap();
    assert!((deg - 1.0).abs() < 1e-12);

    let rad = evaluer("sin(pi/2)", ModeAngle::Radians).unwrap();
    assert!((rad - 1.0).abs() < 1e-12);

    // et les deux passent par le formateur sans artefact
    assert_eq!(format_resultat(deg), "1");
    assert_eq!(format_resultat(rad), "1");
}

#[test]
fn prop_egal_sur_tampon_invalide_puis_saisie() {
    // "=" sur un tampon invalide donne "Error", un chiffre s'ajoute dessus
    // sans paniquer, et le tout reste invalide jusqu'au C
    assert_eq!(affiche(&["+", "="]), "Error");
    assert_eq!(affiche(&["+", "=", "5"]), "Error5");
    assert_eq!(affiche(&["+", "=", "5", "="]), "Error");
    assert_eq!(affiche(&["+", "=", "5", "C", "2", "+", "2", "="]), "4");
}

/* ------------------------ Conversion d'unité ------------------------ */

#[test]
fn prop_conversion_aller_retour() {
    for x in ["1", "33.5", "90", "-12.25", "720"] {
        let rad = convertit(x, ModeAngle::Radians).unwrap();
        let deg = convertit(&rad, ModeAngle::Degres).unwrap();

        let depart: f64 = x.parse().unwrap();
        let retour: f64 = deg.parse().unwrap();
        // l'arrondi à 10 décimales en radians coûte quelques 1e-9 au retour
        assert!(
            (retour - depart).abs() < 1e-8,
            "aller-retour {x:?} -> {rad:?} -> {deg:?}"
        );
    }
}

#[test]
fn prop_conversion_silencieuse_sur_texte() {
    // texte non numérique : aucun changement, aucune erreur visible
    for t in ["Error", "sin(90", "1+2", "pi"] {
        assert!(convertit(t, ModeAngle::Radians).is_none(), "texte={t:?}");
        assert!(convertit(t, ModeAngle::Degres).is_none(), "texte={t:?}");
    }
}

/* ------------------------ Scénarios complets ------------------------ */

#[test]
fn scenario_calcul_scientifique() {
    // sqrt(16)+fact(3) = 4+6 = 10
    assert_eq!(
        affiche(&["√", "1", "6", ")", "+", "!", "3", ")", "="]),
        "10"
    );
}

#[test]
fn scenario_gcd_deux_arguments() {
    // gcd(12,8) — la virgule vient du pavé (littéral)
    assert_eq!(affiche(&["gcd", "1", "2", ",", "8", ")", "="]), "4");
}

#[test]
fn scenario_resultat_rejoue() {
    // le résultat d'un "=" est une saisie valide pour continuer
    let mut m = Moteur::new();
    appuie_tout(&mut m, &["1", "0", "/", "4", "="], ModeAngle::Radians);
    assert_eq!(m.affichage(), "2.5");
    appuie_tout(&mut m, &["*", "2", "="], ModeAngle::Radians);
    assert_eq!(m.affichage(), "5");
}

#[test]
fn scenario_changement_unite_entre_saisie_et_egal() {
    let mut m = Moteur::new();
    appuie_tout(&mut m, &["sin", "9", "0", ")"], ModeAngle::Radians);
    // l'unité passée au "=" l'emporte sur celle de la saisie
    m.interprete(&classe("="), ModeAngle::Degres);
    assert_eq!(m.affichage(), "1");
}
