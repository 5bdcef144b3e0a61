// src/noyau/moteur.rs
//
// Moteur d'expression (machine à états)
// -------------------------------------
// Possède le tampon d'affichage (jamais vide, "0" au repos) et le drapeau
// de signe. Interprète chaque bouton : mutation du tampon, ou évaluation
// ("="), ou signal de pavé (func/Back, sans mutation).
//
// Contrats :
// - tampon tronqué à 80 caractères après chaque interprétation non-pavé
// - drapeau de signe remis à faux dès qu'un bouton autre que +/- passe
// - un "=" raté laisse le texte "Error" dans le tampon, et la saisie
//   continue DESSUS (comportement hérité, conservé tel quel)

use super::boutons::Bouton;
use super::eval::evaluer;
use super::format::format_resultat;
use super::trig::ModeAngle;

/// Longueur maximale du tampon d'affichage.
pub const LONGUEUR_MAX: usize = 80;

/// Consigne de défilement pour la surface d'affichage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Defilement {
    Debut,
    Fin,
}

/// Pavé à montrer (signal pour la vue, aucun contenu).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panneau {
    Principal,
    Fonctions,
}

/// Résultat d'une interprétation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effet {
    /// Le tampon a (peut-être) changé ; défilement demandé.
    Affiche(Defilement),
    /// Changement de pavé ; le tampon n'a pas bougé.
    Panneau(Panneau),
}

#[derive(Clone, Debug)]
pub struct Moteur {
    affichage: String,
    signe: bool,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            signe: false,
        }
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    /// Remplace tout le tampon (conversion d'unité). Hors grammaire d'ajout.
    pub fn remplace(&mut self, texte: String) {
        self.affichage = tronque(texte);
    }

    /// Interprète un bouton. `mode` n'est consulté que sur "=" (l'unité en
    /// vigueur au moment de l'évaluation, pas de la saisie).
    pub fn interprete(&mut self, bouton: &Bouton, mode: ModeAngle) -> Effet {
        if !matches!(bouton, Bouton::Signe) {
            self.signe = false;
        }

        match bouton {
            Bouton::PaveFonctions => return Effet::Panneau(Panneau::Fonctions),
            Bouton::PaveRetour => return Effet::Panneau(Panneau::Principal),
            _ => {}
        }

        let affichage = self.affichage.clone();
        // tampon "vidé" : le "0" de repos s'efface devant une saisie neuve
        let mut valeur = if affichage == "0" {
            String::new()
        } else {
            affichage.clone()
        };
        let mut defilement = Defilement::Fin;

        match bouton {
            Bouton::Egal => {
                valeur = match evaluer(&affichage, mode) {
                    Ok(v) => format_resultat(v),
                    // échec uniforme -> texte "Error" (hérité, non corrigé)
                    Err(_) => "Error".to_string(),
                };
                defilement = Defilement::Debut;
            }

            Bouton::Clear => valeur = "0".to_string(),

            Bouton::Retour => {
                valeur = if affichage.chars().count() > 1 {
                    let mut s = affichage.clone();
                    s.pop();
                    s
                } else {
                    "0".to_string()
                };
            }

            // l'opérande gauche est conservé : ajout sur l'affichage tel quel
            Bouton::Point => valeur = format!("{affichage}."),
            Bouton::OpBinaire(op) => valeur = format!("{affichage}{op}"),
            Bouton::PuissanceCarre => valeur = format!("{affichage}**2"),
            Bouton::PuissanceGenerale => valeur = format!("{affichage}**"),

            Bouton::Signe => {
                if !self.signe {
                    // pose une négation en tête du tampon vidé ; à 80
                    // caractères la troncature mangerait le dernier chiffre,
                    // l'appui est donc ignoré (drapeau non levé)
                    if valeur.chars().count() < LONGUEUR_MAX {
                        valeur = format!("-{valeur}");
                        self.signe = true;
                    }
                } else {
                    // retire la négation posée juste avant
                    let reste = affichage.strip_prefix('-').unwrap_or(affichage.as_str());
                    valeur = if reste.is_empty() {
                        "0".to_string()
                    } else {
                        reste.to_string()
                    };
                    self.signe = false;
                }
            }

            // saisie neuve : ajout sur le tampon vidé
            Bouton::Prefixe(texte) => valeur.push_str(texte),
            Bouton::Fonction(nom) => {
                valeur.push_str(nom);
                valeur.push('(');
            }
            Bouton::Litteral(texte) => valeur.push_str(texte),

            Bouton::PaveFonctions | Bouton::PaveRetour => unreachable!(),
        }

        self.affichage = tronque(valeur);
        Effet::Affiche(defilement)
    }
}

fn tronque(texte: String) -> String {
    if texte.chars().count() <= LONGUEUR_MAX {
        texte
    } else {
        texte.chars().take(LONGUEUR_MAX).collect()
    }
}
