// src/noyau/jetons.rs

/// Jeton d'expression (sortie du tokenizer, entrée du shunting-yard).
#[derive(Clone, Debug)]
pub enum Tok {
    Num(f64),

    // Identifiants : fonctions (sin/log/...) ou constantes (pi/e/tau).
    // NOTE: c'est rpn.rs/eval.rs qui décide fonction vs constante vs inconnu.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    StarStar,   // ** (puissance)
    Percent,    // %  (modulo)
    SlashSlash, // // (division entière)
    Neg,        // moins unaire (produit par rpn.rs, jamais par le tokenizer)

    Virgule, // séparateur d'arguments (gcd)
    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (12, 0.5, .5) avec exposant optionnel (1e15, 2e-3)
/// - opérateurs + - * / % // **
/// - parenthèses ( ) et virgule
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
///
/// L'exposant n'est lu qu'après des chiffres et seulement si des chiffres
/// suivent : "1e15" (résultat du formateur, rejoué tel quel) est un nombre,
/// "2e" laisse le e au tokenizer d'identifiants (constante d'Euler).
pub fn tokenize(s: &str) -> Result<Vec<Tok>, String> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses + virgule
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }
        if c == ',' {
            out.push(Tok::Virgule);
            i += 1;
            continue;
        }

        // Opérateurs (doubles avant simples : ** avant *, // avant /)
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    out.push(Tok::StarStar);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            '/' => {
                if i + 1 < chars.len() && chars[i + 1] == '/' {
                    out.push(Tok::SlashSlash);
                    i += 2;
                } else {
                    out.push(Tok::Slash);
                    i += 1;
                }
                continue;
            }
            '%' => {
                out.push(Tok::Percent);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word.to_lowercase()));
            continue;
        }

        // Nombre : chiffres [. chiffres] [e[+-]chiffres]
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }

            // exposant optionnel : e/E [+-] chiffres (sinon on recule)
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let save = i;
                i += 1;
                if i < chars.len() && (chars[i] == '+' || chars[i] == '-') {
                    i += 1;
                }
                if i < chars.len() && chars[i].is_ascii_digit() {
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                } else {
                    i = save;
                }
            }

            let num_str: String = chars[start..i].iter().collect();
            let n: f64 = num_str
                .parse()
                .map_err(|_| format!("nombre invalide: '{num_str}'"))?;
            out.push(Tok::Num(n));
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}
