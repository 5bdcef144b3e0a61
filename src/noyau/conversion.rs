// src/noyau/conversion.rs
//
// Conversion d'unité de l'affichage (degrés <-> radians)
// ------------------------------------------------------
// Opération "à part" : elle réinterprète la VALEUR affichée comme un angle
// et réécrit tout le tampon, sans passer par la grammaire d'ajout du moteur.

use super::format::arrondi_decimales;
use super::trig::ModeAngle;

/// Convertit la valeur affichée vers l'unité cible.
///
/// Retour:
/// - Some(nouvel_affichage) si converti (l'appelant remplace le tampon
///   et fait défiler au début)
/// - None si rien à faire : affichage "0", ou texte non numérique
///   (échec silencieux, affichage inchangé)
pub fn convertit(affichage: &str, cible: ModeAngle) -> Option<String> {
    if affichage == "0" {
        return None;
    }

    let angle: f64 = affichage.trim().parse().ok()?;

    let converti = match cible {
        ModeAngle::Radians => angle.to_radians(),
        ModeAngle::Degres => angle.to_degrees(),
    };

    Some(format!("{}", arrondi_decimales(converti, 10)))
}

#[cfg(test)]
mod tests {
    use super::convertit;
    use crate::noyau::trig::ModeAngle;

    #[test]
    fn zero_sans_effet() {
        assert!(convertit("0", ModeAngle::Radians).is_none());
    }

    #[test]
    fn texte_non_numerique_sans_effet() {
        assert!(convertit("sin(90", ModeAngle::Radians).is_none());
        assert!(convertit("Error", ModeAngle::Degres).is_none());
        assert!(convertit("1+2", ModeAngle::Degres).is_none());
    }

    #[test]
    fn degres_vers_radians() {
        assert_eq!(convertit("90", ModeAngle::Radians).unwrap(), "1.5707963268");
    }

    #[test]
    fn radians_vers_degres() {
        let pi = format!("{}", std::f64::consts::PI);
        assert_eq!(convertit(&pi, ModeAngle::Degres).unwrap(), "180");
    }

    #[test]
    fn aller_retour() {
        let rad = convertit("33.5", ModeAngle::Radians).unwrap();
        let deg = convertit(&rad, ModeAngle::Degres).unwrap();
        // l'arrondi à 10 décimales du passage en radians coûte jusqu'à
        // quelques 1e-9 degrés au retour
        let retour: f64 = deg.parse().unwrap();
        assert!((retour - 33.5).abs() < 1e-8);
    }
}
