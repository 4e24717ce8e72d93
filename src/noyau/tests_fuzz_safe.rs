//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l'API publique sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueurs bornées
//! - budget temps global
//! - invariants clés à chaque pas :
//!   * aucune transition publique ne panique ni n'échoue
//!   * affichage == stringifier(jetons)
//!   * analyser(affichage) == jetons (loi d'aller-retour)
//!   * un marqueur terminal est seul, ou précédé d'un unique signe

use std::time::{Duration, Instant};

use super::etat::EtatSession;
use super::jetons::{est_signe, est_terminal, Commande, Entree, Operation};
use super::lecture::{analyser, stringifier};
use super::validation::entree_valide;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches ------------------------ */

fn gen_entree(rng: &mut Rng) -> Entree {
    match rng.pick(8) {
        0 => Entree::Point,
        1 => Entree::Operation(Operation::Plus),
        2 => Entree::Operation(Operation::Moins),
        3 => Entree::Operation(Operation::Fois),
        4 => Entree::Operation(Operation::Divise),
        // majorité de chiffres : on veut des expressions qui avancent
        _ => Entree::Chiffre(rng.pick(10) as u8),
    }
}

fn gen_commande(rng: &mut Rng) -> Commande {
    match rng.pick(4) {
        0 => Commande::ToutEffacer,
        1 => Commande::EffacerDernier,
        // "=" deux fois plus probable : c'est le chemin le plus riche
        _ => Commande::Evaluer,
    }
}

/* ------------------------ Invariants ------------------------ */

fn verifier_invariants(etat: &EtatSession) {
    let rendu = stringifier(etat.jetons());
    assert_eq!(etat.afficher(), rendu, "cohérence affichage/jetons");

    let relu = analyser(etat.afficher())
        .unwrap_or_else(|e| panic!("aller-retour impossible sur {:?}: {e}", etat.afficher()));
    assert_eq!(relu, etat.jetons(), "aller-retour cassé");

    // marqueur terminal : seul, ou [Signe, marqueur]
    if etat.jetons().iter().any(est_terminal) {
        let valide = match etat.jetons() {
            [seul] => est_terminal(seul),
            [signe, marqueur] => est_signe(signe) && est_terminal(marqueur),
            _ => false,
        };
        assert!(valide, "marqueur mal placé: {:?}", etat.jetons());
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_transitions_jamais_en_echec() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes séquences => mêmes états (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut etat = EtatSession::vide();
    let mut refus = 0usize;
    let mut evaluations = 0usize;

    for pas in 0..4000 {
        budget(t0, max);

        if rng.pick(5) == 0 {
            let commande = gen_commande(&mut rng);
            if commande == Commande::Evaluer {
                evaluations += 1;
            }
            etat = etat
                .appliquer_commande(commande)
                .unwrap_or_else(|e| panic!("pas {pas}, commande {commande:?}: {e}"));
        } else {
            let entree = gen_entree(&mut rng);
            if !entree_valide(entree, etat.jetons()) {
                refus += 1;
            }
            etat = etat
                .appliquer_entree(entree)
                .unwrap_or_else(|e| panic!("pas {pas}, entrée {entree:?}: {e}"));
        }

        verifier_invariants(&etat);
    }

    // Le fuzz doit balayer les deux chemins, sinon il ne teste rien.
    assert!(refus > 50, "trop peu de refus: {refus}");
    assert!(evaluations > 50, "trop peu d'évaluations: {evaluations}");
}

#[test]
fn fuzz_safe_determinisme_rejouable() {
    let derouler = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut etat = EtatSession::vide();
        for _ in 0..600 {
            etat = if rng.pick(6) == 0 {
                etat.appliquer_commande(gen_commande(&mut rng))
            } else {
                etat.appliquer_entree(gen_entree(&mut rng))
            }
            .expect("transition");
        }
        etat
    };

    // même seed => même état final, à l'identique
    assert_eq!(derouler(0xBADC0DE), derouler(0xBADC0DE));
}

#[test]
fn fuzz_safe_validateur_total() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xFACADE_u64);
    let mut etat = EtatSession::vide();

    for _ in 0..1500 {
        budget(t0, max);

        // le validateur répond toujours, quel que soit le couple (entrée, suite)
        for candidat in [
            Entree::Point,
            Entree::Chiffre(0),
            Entree::Chiffre(9),
            Entree::Operation(Operation::Plus),
            Entree::Operation(Operation::Moins),
            Entree::Operation(Operation::Fois),
            Entree::Operation(Operation::Divise),
        ] {
            let _ = entree_valide(candidat, etat.jetons());
        }

        etat = if rng.pick(7) == 0 {
            etat.appliquer_commande(gen_commande(&mut rng))
        } else {
            etat.appliquer_entree(gen_entree(&mut rng))
        }
        .expect("transition");
    }
}

#[test]
fn fuzz_safe_longue_expression_bornee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    // expression volontairement longue (dizaines de termes), évaluée d'un coup
    let mut etat = EtatSession::vide();
    for i in 0..120u32 {
        etat = etat
            .appliquer_entree(Entree::Chiffre((1 + i % 9) as u8))
            .unwrap();
        etat = etat
            .appliquer_entree(Entree::Operation(Operation::Plus))
            .unwrap();
    }
    budget(t0, max);

    let resultat = etat.appliquer_commande(Commande::Evaluer).unwrap();
    verifier_invariants(&resultat);
    budget(t0, max);

    let attendu: u32 = (0..120u32).map(|i| 1 + i % 9).sum();
    assert_eq!(resultat.afficher(), attendu.to_string());
}
