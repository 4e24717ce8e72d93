// src/noyau/lecture.rs
//
// Stringifier ⇄ analyser : le pont exact entre suite de jetons et texte.
//
// Loi d'aller-retour : analyser(stringifier(s)) == s pour toute suite s
// que le validateur laisse produire (vérifiée en tests + fuzz).
//
// Règle du '-' :
// - en tête de chaîne, ou juste après un littéral d'opérateur => Signe
// - juste après un Signe => SigneDuplique ("--1" est irrecevable)
// - sinon => opérateur soustraction
//
// "Infinity" / "Error" : mots atomiques. Seul le premier caractère ('I'/'E')
// émet un jeton; la suite du mot n'est consommée qu'en confirmation, car le
// marqueur sort toujours entier de l'évaluation (jamais tapé).

use super::erreurs::{ErreurNoyau, Resultat};
use super::jetons::{litteral, Jeton, Operation, Terminal};

/// Concatène les littéraux canoniques. Totale : ne peut pas échouer.
pub fn stringifier(jetons: &[Jeton]) -> String {
    let mut texte = String::with_capacity(jetons.len());
    for jeton in jetons {
        texte.push_str(litteral(jeton));
    }
    texte
}

/// Reconstruit la suite de jetons depuis son rendu canonique.
/// Seule la sortie de `stringifier` a vocation à repasser ici.
pub fn analyser(texte: &str) -> Resultat<Vec<Jeton>> {
    let caracteres: Vec<char> = texte.chars().collect();
    let mut jetons: Vec<Jeton> = Vec::with_capacity(caracteres.len());
    let mut i: usize = 0;

    while i < caracteres.len() {
        let c = caracteres[i];

        if let Some(chiffre) = c.to_digit(10) {
            jetons.push(Jeton::Chiffre(chiffre as u8));
            i += 1;
            continue;
        }

        match c {
            '.' => {
                jetons.push(Jeton::Point);
                i += 1;
                continue;
            }
            '+' => {
                jetons.push(Jeton::Operation(Operation::Plus));
                i += 1;
                continue;
            }
            '×' => {
                jetons.push(Jeton::Operation(Operation::Fois));
                i += 1;
                continue;
            }
            '÷' => {
                jetons.push(Jeton::Operation(Operation::Divise));
                i += 1;
                continue;
            }
            '-' => {
                let jeton = desambiguer_moins(&jetons, i)?;
                jetons.push(jeton);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Marqueurs terminaux : mot entier exigé à la position courante.
        if c == 'I' && mot_present(&caracteres, i, "Infinity") {
            jetons.push(Jeton::Terminal(Terminal::Infini));
            i += "Infinity".chars().count();
            continue;
        }
        if c == 'E' && mot_present(&caracteres, i, "Error") {
            jetons.push(Jeton::Terminal(Terminal::Erreur));
            i += "Error".chars().count();
            continue;
        }

        return Err(ErreurNoyau::CaractereInvalide {
            caractere: c,
            position: i,
        });
    }

    Ok(jetons)
}

/// '-' => Signe en tête ou après opérateur, erreur après Signe, sinon Moins.
fn desambiguer_moins(jetons: &[Jeton], position: usize) -> Resultat<Jeton> {
    match jetons.last() {
        None | Some(Jeton::Operation(_)) => Ok(Jeton::Signe),
        Some(Jeton::Signe) => Err(ErreurNoyau::SigneDuplique { position }),
        Some(_) => Ok(Jeton::Operation(Operation::Moins)),
    }
}

fn mot_present(caracteres: &[char], depuis: usize, mot: &str) -> bool {
    let mut i = depuis;
    for attendu in mot.chars() {
        if caracteres.get(i) != Some(&attendu) {
            return false;
        }
        i += 1;
    }
    true
}

/* ------------------------ Tests ------------------------ */
