// src/noyau/erreurs.rs
//
// Taxonomie d'erreurs du noyau.
//
// Toutes ces erreurs signalent un DÉFAUT DE PILOTAGE du moteur (chaîne
// malformée, invariant cassé en amont, état trafiqué hors du noyau) : elles
// font échouer l'appel, sans reprise.
//
// La division par zéro n'est PAS ici : c'est un résultat de domaine,
// représenté par les marqueurs Infinity/Error DANS la suite de jetons.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurNoyau {
    /// Caractère hors grammaire pendant l'analyse.
    CaractereInvalide { caractere: char, position: usize },
    /// Deux `-` éligibles au signe, adjacents, sans opérande entre eux ("--1").
    SigneDuplique { position: usize },
    /// Un terme vide ou non numérique là où une valeur est exigée
    /// (la validation aurait dû l'empêcher).
    TermeNonNumerique { terme: String },
    /// Affichage ≠ stringifier(jetons) : état modifié hors du noyau. Fatal.
    EtatCorrompu { attendu: String, trouve: String },
}

impl fmt::Display for ErreurNoyau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurNoyau::CaractereInvalide {
                caractere,
                position,
            } => {
                write!(f, "caractère inattendu '{caractere}' en position {position}")
            }
            ErreurNoyau::SigneDuplique { position } => {
                write!(f, "signe dupliqué en position {position}")
            }
            ErreurNoyau::TermeNonNumerique { terme } => {
                write!(f, "terme non numérique: {terme:?}")
            }
            ErreurNoyau::EtatCorrompu { attendu, trouve } => {
                write!(
                    f,
                    "état corrompu: affichage {trouve:?}, attendu {attendu:?}"
                )
            }
        }
    }
}

impl std::error::Error for ErreurNoyau {}

pub type Resultat<T> = std::result::Result<T, ErreurNoyau>;
