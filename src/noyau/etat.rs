// src/noyau/etat.rs
//
// Contrôleur de session : la paire immuable (jetons, affichage) et rien d'autre.
//
// Contrats :
// - Aucune mutation en place : chaque opération rend un NOUVEL état.
// - Invariant de cohérence vérifié à l'entrée de chaque appel public :
//   affichage == stringifier(jetons), sinon EtatCorrompu (fatal).
// - Marqueur terminal présent + nouvelle entrée => AC implicite d'abord,
//   puis traitement comme sur un état vierge.
// - Entrée invalide => l'état est rendu inchangé (pas une erreur).

use serde::{Deserialize, Serialize};

use super::erreurs::{ErreurNoyau, Resultat};
use super::eval::evaluer;
use super::jetons::{concretiser, est_terminal, litteral, Commande, Entree, Jeton};
use super::lecture::stringifier;
use super::validation::entree_valide;

/// État complet d'une session : la suite de jetons et son rendu canonique.
/// Forme persistée (côté hôte) : `{ "parsed": [...], "stringified": "..." }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EtatSession {
    #[serde(rename = "parsed")]
    pub(crate) jetons: Vec<Jeton>,
    #[serde(rename = "stringified")]
    pub(crate) affiche: String,
}

impl Default for EtatSession {
    fn default() -> Self {
        Self::vide()
    }
}

impl EtatSession {
    /// État de départ : suite vide, affichage vide.
    pub fn vide() -> Self {
        Self {
            jetons: Vec::new(),
            affiche: String::new(),
        }
    }

    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    /// Surface de lecture : le rendu canonique, déjà en cache.
    pub fn afficher(&self) -> &str {
        &self.affiche
    }

    /* ------------------------ Transitions ------------------------ */

    /// Applique une entrée saisissable. Rend le nouvel état; un refus de
    /// validation rend l'état (éventuellement vidé par l'AC implicite) inchangé.
    pub fn appliquer_entree(&self, entree: Entree) -> Resultat<EtatSession> {
        self.verifier_coherence()?;

        // Un résultat terminal n'est pas composable : AC implicite.
        let mut nouvel_etat = if self.jetons.iter().any(est_terminal) {
            EtatSession::vide()
        } else {
            self.clone()
        };

        if !entree_valide(entree, &nouvel_etat.jetons) {
            return Ok(nouvel_etat);
        }

        let jeton = concretiser(entree, &nouvel_etat.jetons);
        nouvel_etat.affiche.push_str(litteral(&jeton));
        nouvel_etat.jetons.push(jeton);
        Ok(nouvel_etat)
    }

    /// Applique une commande de contrôle (AC / retour / =).
    pub fn appliquer_commande(&self, commande: Commande) -> Resultat<EtatSession> {
        self.verifier_coherence()?;

        match commande {
            Commande::ToutEffacer => Ok(EtatSession::vide()),
            Commande::EffacerDernier => Ok(self.sans_dernier()),
            Commande::Evaluer => {
                let jetons = evaluer(&self.jetons)?;
                // re-rendu complet, pas incrémental
                let affiche = stringifier(&jetons);
                Ok(EtatSession { jetons, affiche })
            }
        }
    }

    /// Retire le dernier jeton ET son littéral en queue d'affichage
    /// (littéraux multi-caractères "Infinity"/"Error" compris).
    fn sans_dernier(&self) -> EtatSession {
        let mut jetons = self.jetons.clone();
        let dernier = match jetons.pop() {
            None => return EtatSession::vide(),
            Some(jeton) => jeton,
        };

        // la cohérence (vérifiée à l'entrée) garantit ce suffixe
        let affiche = match self.affiche.strip_suffix(litteral(&dernier)) {
            Some(reste) => reste.to_string(),
            // défense : re-rendu complet plutôt qu'un affichage faux
            None => stringifier(&jetons),
        };

        EtatSession { jetons, affiche }
    }

    /* ------------------------ Invariant ------------------------ */

    /// affichage == stringifier(jetons), sinon l'état a été trafiqué
    /// hors du noyau : fatal, pas de reprise.
    fn verifier_coherence(&self) -> Resultat<()> {
        let attendu = stringifier(&self.jetons);
        if attendu != self.affiche {
            return Err(ErreurNoyau::EtatCorrompu {
                attendu,
                trouve: self.affiche.clone(),
            });
        }
        Ok(())
    }
}

/* ------------------------ Tests ------------------------ */
