//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le moteur d'expression, l'unité d'angle, le pavé visible
//! et la consigne de défilement en attente, et offrir les deux entrées
//! d'événements (appui bouton / changement d'unité) sans logique d'affichage.

use crate::noyau::boutons::classe;
use crate::noyau::conversion::convertit;
use crate::noyau::moteur::{Defilement, Effet, Panneau};
use crate::noyau::{ModeAngle, Moteur};

pub struct AppCalc {
    pub moteur: Moteur,

    /// Unité courante des fonctions trigonométriques (radios deg/rad).
    pub mode: ModeAngle,

    /// Pavé visible (principal ou fonctions étendues).
    pub panneau: Panneau,

    /// Consigne de défilement à consommer par la vue (une seule frame).
    pub defilement: Option<Defilement>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: Moteur::new(),
            mode: ModeAngle::Degres, // premier radio coché au démarrage
            panneau: Panneau::Principal,
            defilement: None,
        }
    }
}

impl AppCalc {
    /// Un appui de bouton : classification puis interprétation.
    pub fn appuie(&mut self, label: &str) {
        match self.moteur.interprete(&classe(label), self.mode) {
            Effet::Affiche(d) => self.defilement = Some(d),
            Effet::Panneau(p) => self.panneau = p,
        }
    }

    /// Changement d'unité : bascule le mode ET convertit la valeur affichée
    /// vers l'unité cible (réécriture complète du tampon, pas d'ajout).
    /// Un affichage non numérique est laissé tel quel, sans erreur.
    pub fn change_unite(&mut self, cible: ModeAngle) {
        self.mode = cible;

        if let Some(nouveau) = convertit(self.moteur.affichage(), cible) {
            self.moteur.remplace(nouveau);
            self.defilement = Some(Defilement::Debut);
        }
    }

    /// Raccourci clavier : comme le bouton "C".
    pub fn clear_entree(&mut self) {
        self.appuie("C");
    }
}
