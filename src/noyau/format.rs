// src/noyau/format.rs
//
// Affichage canonique du résultat
// -------------------------------
// Règles (seuils historiques, à préserver tels quels) :
// - valeur entière, |v| < 10^12  -> entier simple ("4", "-17")
// - valeur entière sinon         -> notation exponentielle
// - valeur non entière : arrondi à 10 décimales d'abord,
//   |v| < 10^10 -> décimal simple ("2.5"), sinon exponentielle.
//
// Les seuils sont empiriques (lisibilité), pas physiques.

const SEUIL_ENTIER: f64 = 1e12;
const SEUIL_DECIMAL: f64 = 1e10;

/// Arrondit à `n` décimales. Sans effet sur les valeurs trop grandes pour
/// que la multiplication reste finie (elles partent en exponentielle de
/// toute façon).
pub fn arrondi_decimales(x: f64, n: i32) -> f64 {
    let facteur = 10f64.powi(n);
    let agrandi = x * facteur;
    if !agrandi.is_finite() {
        return x;
    }
    agrandi.round() / facteur
}

/// Formate un résultat d'évaluation pour l'affichage.
pub fn format_resultat(res: f64) -> String {
    if res.fract() == 0.0 {
        if res.abs() < SEUIL_ENTIER {
            // cast sûr : |res| < 10^12 tient largement dans i64
            return format!("{}", res as i64);
        }
        return format!("{res:e}");
    }

    let arrondi = arrondi_decimales(res, 10);
    if arrondi.abs() < SEUIL_DECIMAL {
        if arrondi.fract() == 0.0 {
            // non entier à l'origine : l'arrondi garde sa forme décimale
            // ("1.0", pas "1")
            format!("{arrondi:.1}")
        } else {
            format!("{arrondi}")
        }
    } else {
        format!("{arrondi:e}")
    }
}
