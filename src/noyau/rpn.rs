// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), prête pour eval.rs
//
// Règles:
// - Ident(name):
//    - si eval::est_fonction(name) => fonction (postfixée en RPN, sortie
//      après sa parenthèse fermante)
//    - sinon => atome (constante ou inconnu, tranché par eval.rs)
// - Moins unaire:
//    - si '-' arrive quand on n'attend PAS une valeur, il devient Tok::Neg,
//      préfixe lié plus fort que % * / mais moins fort que ** :
//      "-7%3" => 2 et "-2**2" => -4 (sémantique de l'hôte d'origine).
// - Virgule: dépile jusqu'à '(' (séparateur d'arguments, gcd).

use super::eval::est_fonction;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent | Tok::SlashSlash => 2,
        // Neg et ** à égalité : l'associativité droite les départage
        // (Neg reste sous un ** déjà empilé, ** reste sous un Neg empilé).
        Tok::StarStar | Tok::Neg => 3,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::StarStar | Tok::Neg)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Num(90), RPar]
///   rpn:    [Num(90), Ident("sin")]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, String> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // "valeur" = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if est_fonction(&name) {
                    // fonction : elle sortira après son argument
                    ops.push(Tok::Ident(name));
                    prev_was_value = false;
                } else {
                    // constante (ou nom inconnu) : sortie directe
                    out.push(Tok::Ident(name));
                    prev_was_value = true;
                }
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err("parenthèse fermante en trop".into());
                }

                // si une fonction est au sommet, on la sort aussi
                if let Some(Tok::Ident(name)) = ops.last() {
                    if est_fonction(name.as_str()) {
                        out.push(ops.pop().unwrap());
                    }
                }

                prev_was_value = true;
            }

            Tok::Virgule => {
                // séparateur d'arguments : dépile jusqu'à '(' (qui reste)
                loop {
                    match ops.last() {
                        Some(Tok::LPar) => break,
                        Some(_) => out.push(ops.pop().unwrap()),
                        None => return Err("virgule hors parenthèses".into()),
                    }
                }
                prev_was_value = false;
            }

            Tok::Plus | Tok::Star | Tok::Slash | Tok::Percent | Tok::SlashSlash
            | Tok::StarStar => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et on ne traverse pas une fonction (collée à son argument)
                // - et la précédence/associativité exige de sortir le sommet
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    if let Tok::Ident(name) = top {
                        if est_fonction(name.as_str()) {
                            break;
                        }
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if doit_pop {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Minus => {
                if !prev_was_value {
                    // moins unaire : préfixe, ne force rien à sortir
                    ops.push(Tok::Neg);
                    prev_was_value = false;
                    continue;
                }

                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    if let Tok::Ident(name) = top {
                        if est_fonction(name.as_str()) {
                            break;
                        }
                    }
                    if precedence(top) >= precedence(&Tok::Minus) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(Tok::Minus);
                prev_was_value = false;
            }

            // ne sort jamais du tokenizer
            Tok::Neg => return Err("jeton inattendu".into()),
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err("parenthèses non fermées".into());
        }
        out.push(op);
    }

    Ok(out)
}
