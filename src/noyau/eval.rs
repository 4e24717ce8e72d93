// src/noyau/eval.rs
//
// Réduction d'une suite de jetons vers une suite-résultat.
//
// Pipeline :
//   contamination Error -> identité si aucun opérateur -> purge du jeton
//   pendouillant -> passe ×÷ -> passe +− -> arrondi + re-lecture canonique
//
// Chaque passe réduit l'opérateur le plus à GAUCHE de sa classe avec ses
// termes immédiats, et épisse la sous-suite résultat à la place des trois
// morceaux, jusqu'à épuisement de la classe. O(n²) assumé : n se compte en
// dizaines de jetons.
//
// La division par zéro n'échoue pas : elle produit les marqueurs
// Infinity (n÷0, signe conservé) ou Error (0÷0), qui contaminent ensuite
// toute réduction les consommant.

use super::erreurs::{ErreurNoyau, Resultat};
use super::format::formater_arrondi;
use super::jetons::{est_operation, Jeton, Terminal};
use super::lecture::{analyser, stringifier};

/// Décimales d'arrondi par défaut (convention calculatrice).
pub const PRECISION_DEFAUT: u32 = 2;

/// Évalue avec l'arrondi par défaut.
pub fn evaluer(jetons: &[Jeton]) -> Resultat<Vec<Jeton>> {
    evaluer_avec_precision(jetons, PRECISION_DEFAUT)
}

/// Évalue la suite et rend la suite-résultat canonique.
///
/// - aucune opération => identité (un terme seul n'est pas re-formaté)
/// - marqueur Error présent n'importe où => exactement [Error]
/// - résultat avec marqueur => rendu tel quel, sans arrondi
/// - sinon => arrondi demi-supérieur à `decimales`, puis re-lecture
pub fn evaluer_avec_precision(jetons: &[Jeton], decimales: u32) -> Resultat<Vec<Jeton>> {
    // Error est infectieux et total.
    if contient_erreur(jetons) {
        return Ok(vec![Jeton::Terminal(Terminal::Erreur)]);
    }

    if !jetons.iter().any(est_operation) {
        return Ok(jetons.to_vec());
    }

    let mut travail: Vec<Jeton> = jetons.to_vec();

    // Purge du jeton pendouillant ("5+" s'évalue comme "5").
    // Un seul peut traîner, la boucle est une ceinture de plus.
    while matches!(
        travail.last(),
        Some(Jeton::Operation(_)) | Some(Jeton::Signe)
    ) {
        travail.pop();
    }
    if travail.is_empty() {
        return Err(ErreurNoyau::TermeNonNumerique {
            terme: String::new(),
        });
    }

    reduire_classe(&mut travail, true)?; // ×÷
    reduire_classe(&mut travail, false)?; // +−

    // Un marqueur sort tel quel : ni arrondi, ni re-lecture.
    if travail.iter().any(|jeton| matches!(jeton, Jeton::Terminal(_))) {
        return Ok(travail);
    }

    // Arrondi + normalisation par re-lecture (retire les zéros de fin, etc.).
    let valeur = terme_en_valeur(&travail)?;
    analyser(&formater_arrondi(valeur, decimales))
}

/* ------------------------ Passes de réduction ------------------------ */

/// Réduit tous les opérateurs d'une classe de priorité, de gauche à droite.
fn reduire_classe(travail: &mut Vec<Jeton>, prioritaire: bool) -> Resultat<()> {
    loop {
        let position = match position_operation(travail, prioritaire) {
            None => return Ok(()),
            Some(position) => position,
        };

        let operation = match travail[position] {
            Jeton::Operation(operation) => operation,
            _ => unreachable!("position_operation ne vise que des opérateurs"),
        };

        let debut = debut_terme_gauche(travail, position);
        let fin = fin_terme_droit(travail, position);
        let gauche = &travail[debut..position];
        let droit = &travail[position + 1..fin];

        // Un opérande contaminé absorbe la réduction ENTIÈRE.
        if contient_erreur(gauche) || contient_erreur(droit) {
            *travail = vec![Jeton::Terminal(Terminal::Erreur)];
            return Ok(());
        }

        let valeur = operation.appliquer(terme_en_valeur(gauche)?, terme_en_valeur(droit)?);
        let resultat = valeur_en_jetons(valeur)?;
        travail.splice(debut..fin, resultat);
    }
}

/// Opérateur le plus à gauche de la classe demandée.
fn position_operation(jetons: &[Jeton], prioritaire: bool) -> Option<usize> {
    jetons.iter().position(|jeton| {
        matches!(jeton, Jeton::Operation(operation) if operation.prioritaire() == prioritaire)
    })
}

/// Début (inclus) du terme immédiatement à gauche de l'opérateur.
fn debut_terme_gauche(jetons: &[Jeton], position: usize) -> usize {
    let mut debut = position;
    while debut > 0 && !est_operation(&jetons[debut - 1]) {
        debut -= 1;
    }
    debut
}

/// Fin (exclue) du terme immédiatement à droite de l'opérateur.
fn fin_terme_droit(jetons: &[Jeton], position: usize) -> usize {
    let mut fin = position + 1;
    while fin < jetons.len() && !est_operation(&jetons[fin]) {
        fin += 1;
    }
    fin
}

/* ------------------------ Termes ⇄ valeurs ------------------------ */

/// Valeur numérique d'un terme (passage par le texte canonique).
/// Les marqueurs Infinity donnent ±∞; Error n'arrive pas ici (filtré avant).
fn terme_en_valeur(terme: &[Jeton]) -> Resultat<f64> {
    match terme {
        [Jeton::Terminal(Terminal::Infini)] => return Ok(f64::INFINITY),
        [Jeton::Signe, Jeton::Terminal(Terminal::Infini)] => return Ok(f64::NEG_INFINITY),
        _ => {}
    }

    let texte = stringifier(terme);
    texte
        .parse::<f64>()
        .map_err(|_| ErreurNoyau::TermeNonNumerique { terme: texte })
}

/// Sous-suite résultat d'une réduction.
/// NaN (0÷0, ∞−∞) => [Error]; ±∞ => Infinity signé; fini => re-lecture
/// du rendu décimal complet (pas d'arrondi en cours de route).
fn valeur_en_jetons(valeur: f64) -> Resultat<Vec<Jeton>> {
    if valeur.is_nan() {
        return Ok(vec![Jeton::Terminal(Terminal::Erreur)]);
    }
    if valeur.is_infinite() {
        let mut jetons = Vec::with_capacity(2);
        if valeur.is_sign_negative() {
            jetons.push(Jeton::Signe);
        }
        jetons.push(Jeton::Terminal(Terminal::Infini));
        return Ok(jetons);
    }

    // le Display de f64 reste décimal (jamais d'exposant) : re-lisible tel quel
    analyser(&valeur.to_string())
}

fn contient_erreur(jetons: &[Jeton]) -> bool {
    jetons
        .iter()
        .any(|jeton| matches!(jeton, Jeton::Terminal(Terminal::Erreur)))
}

/* ------------------------ Tests ------------------------ */
