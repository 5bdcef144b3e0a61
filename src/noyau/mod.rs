//! Noyau calculatrice
//!
//! Organisation interne :
//! - boutons.rs    : classification des étiquettes de boutons
//! - moteur.rs     : machine à états (tampon d'affichage + signe)
//! - jetons.rs     : tokenisation des expressions
//! - rpn.rs        : shunting-yard (RPN)
//! - eval.rs       : évaluation f64, espace de noms restreint
//! - trig.rs       : adaptateur degrés/radians
//! - format.rs     : affichage canonique du résultat
//! - conversion.rs : conversion degrés<->radians de l'affichage

pub mod boutons;
pub mod conversion;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod rpn;
pub mod trig;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use eval::evaluer;
pub use moteur::Moteur;
pub use trig::ModeAngle;
