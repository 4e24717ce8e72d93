// src/noyau/validation.rs
//
// Validation incrémentale : une entrée candidate est-elle acceptable
// au bout de la suite courante ?
//
// Fonction TOTALE : jamais de panique, jamais d'erreur — un simple booléen.
// Les combinaisons inatteignables par l'API (marqueur terminal en fin de
// suite : le contrôleur fait un AC implicite avant) sont refusées.

use super::jetons::{dernier_terme, Entree, Jeton, Operation};

/// Accepter `entree` au bout de `jetons` préserve-t-il une expression bien formée ?
pub fn entree_valide(entree: Entree, jetons: &[Jeton]) -> bool {
    match entree {
        Entree::Chiffre(_) => true,
        Entree::Point => point_valide(jetons),
        Entree::Operation(operation) => operation_valide(operation, jetons),
    }
}

/// Point décimal : jamais en tête, jamais après opérateur/signe,
/// au plus un par terme.
fn point_valide(jetons: &[Jeton]) -> bool {
    let dernier = match jetons.last() {
        None => return false,
        Some(jeton) => jeton,
    };

    match dernier {
        Jeton::Operation(_) | Jeton::Signe => false,
        Jeton::Chiffre(_) | Jeton::Point => {
            !dernier_terme(jetons).contains(&Jeton::Point)
        }
        // jamais atteint via l'API (AC implicite avant)
        Jeton::Terminal(_) => false,
    }
}

fn operation_valide(operation: Operation, jetons: &[Jeton]) -> bool {
    let dernier = match jetons.last() {
        // suite vide : seul un moins (futur signe de tête) est recevable
        None => return operation == Operation::Moins,
        Some(jeton) => jeton,
    };

    match dernier {
        Jeton::Point | Jeton::Signe => false,
        // un moins après opérateur devient signe — sauf après un moins (pas de double)
        Jeton::Operation(Operation::Moins) => false,
        Jeton::Operation(_) => operation == Operation::Moins,
        Jeton::Chiffre(_) => true,
        // jamais atteint via l'API (AC implicite avant)
        Jeton::Terminal(_) => false,
    }
}

/* ------------------------ Tests ------------------------ */
