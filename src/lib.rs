//! Calculatrice à flux de jetons — noyau pur
//!
//! Moteur d'édition incrémentale d'une suite de jetons : chaque entrée
//! (chiffre, point, opérateur) est validée contre l'état courant, puis
//! ajoutée; les commandes (AC / retour / =) remplacent la suite entière.
//! Aucun état caché : chaque opération est `(état, entrée) -> état`.
//!
//! La vue, les listeners et le stockage effectif sont des collaborateurs
//! externes; ils ne consomment que deux surfaces :
//! - transition : `EtatSession::appliquer_entree` / `appliquer_commande`
//! - lecture    : `EtatSession::afficher`

pub mod noyau;

// API publique minimale
pub use noyau::erreurs::{ErreurNoyau, Resultat};
pub use noyau::etat::EtatSession;
pub use noyau::eval::{evaluer, evaluer_avec_precision, PRECISION_DEFAUT};
pub use noyau::jetons::{Commande, Entree, Jeton, Operation, Terminal};
pub use noyau::lecture::{analyser, stringifier};
pub use noyau::stockage::{charger, sauvegarder, ErreurStockage};
pub use noyau::validation::entree_valide;
