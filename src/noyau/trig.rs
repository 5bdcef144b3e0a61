// src/noyau/trig.rs
//
// Trig degrés/radians
// -------------------
// - ModeAngle : unité choisie par l'utilisateur (radios de la vue)
// - AdaptateurTrig : sin/cos/tan convertissent l'ARGUMENT (deg -> rad),
//   asin/acos/atan convertissent le RÉSULTAT (rad -> deg)
//
// L'adaptateur est construit au moment de l'évaluation ("="), jamais à la
// saisie : changer d'unité entre deux touches change le résultat.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeAngle {
    Degres,
    Radians,
}

#[derive(Clone, Copy, Debug)]
pub struct AdaptateurTrig {
    mode: ModeAngle,
}

impl AdaptateurTrig {
    pub fn new(mode: ModeAngle) -> Self {
        Self { mode }
    }

    fn entree(&self, x: f64) -> f64 {
        match self.mode {
            ModeAngle::Degres => x.to_radians(),
            ModeAngle::Radians => x,
        }
    }

    fn sortie(&self, x: f64) -> f64 {
        match self.mode {
            ModeAngle::Degres => x.to_degrees(),
            ModeAngle::Radians => x,
        }
    }

    pub fn sin(&self, x: f64) -> f64 {
        self.entree(x).sin()
    }

    pub fn cos(&self, x: f64) -> f64 {
        self.entree(x).cos()
    }

    pub fn tan(&self, x: f64) -> f64 {
        self.entree(x).tan()
    }

    pub fn asin(&self, x: f64) -> f64 {
        self.sortie(x.asin())
    }

    pub fn acos(&self, x: f64) -> f64 {
        self.sortie(x.acos())
    }

    pub fn atan(&self, x: f64) -> f64 {
        self.sortie(x.atan())
    }
}
