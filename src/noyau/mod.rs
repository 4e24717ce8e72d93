//! Noyau calculatrice à flux de jetons
//!
//! Organisation interne :
//! - jetons.rs     : alphabet (jetons, entrées, commandes) + prédicats
//! - lecture.rs    : stringifier ⇄ analyser (aller-retour exact)
//! - validation.rs : entrée acceptable selon l'état courant
//! - format.rs     : arrondi demi-supérieur + texte décimal canonique
//! - eval.rs       : réduction par priorité (×÷ puis +−)
//! - etat.rs       : contrôleur de session (paire jetons/affichage)
//! - erreurs.rs    : taxonomie d'erreurs du noyau
//! - stockage.rs   : forme persistée { parsed, stringified }

pub mod erreurs;
pub mod etat;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod stockage;
pub mod validation;


#[cfg(test)]
mod tests_fuzz_safe;
