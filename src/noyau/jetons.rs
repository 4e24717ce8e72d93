// src/noyau/jetons.rs
//
// Alphabet du noyau.
// - Jeton    : symbole STOCKÉ dans la suite (chiffre, point, opérateur, signe, marqueur)
// - Entree   : symbole SAISISSABLE (jamais de signe ni de marqueur : le signe
//              naît d'un moins contextuel, les marqueurs naissent de l'évaluation)
// - Commande : instruction transitoire (AC / retour / =), jamais stockée
//
// Unions fermées + match exhaustif : pas de catégorisation dynamique par chaînes.

/// Marqueur terminal : produit UNIQUEMENT par l'évaluation.
/// Une suite qui en contient un est un résultat, pas une expression composable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terminal {
    /// n÷0 (n ≠ 0), littéral "Infinity"
    Infini,
    /// 0÷0 ou contamination, littéral "Error"
    Erreur,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operation {
    /// Fonction arithmétique binaire (double précision).
    pub fn appliquer(self, x: f64, y: f64) -> f64 {
        match self {
            Operation::Plus => x + y,
            Operation::Moins => x - y,
            Operation::Fois => x * y,
            Operation::Divise => x / y,
        }
    }

    /// Classe de priorité : ×÷ se réduisent avant +−.
    pub fn prioritaire(self) -> bool {
        matches!(self, Operation::Fois | Operation::Divise)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// 0..=9 (invariant maintenu par le noyau)
    Chiffre(u8),
    /// Séparateur décimal
    Point,
    Operation(Operation),
    /// Moins UNAIRE (distinct de l'opérateur soustraction)
    Signe,
    Terminal(Terminal),
}

/// Entrée candidate : l'alphabet saisissable seulement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entree {
    Chiffre(u8),
    Point,
    Operation(Operation),
}

/// Commande transitoire : remplace la suite entière, n'y entre jamais.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    ToutEffacer,
    EffacerDernier,
    Evaluer,
}

/* ------------------------ Prédicats de classification ------------------------ */

/// Chiffre OU point décimal (la catégorie "digit" de l'alphabet).
pub fn est_chiffre(jeton: &Jeton) -> bool {
    matches!(jeton, Jeton::Chiffre(_) | Jeton::Point)
}

pub fn est_operation(jeton: &Jeton) -> bool {
    matches!(jeton, Jeton::Operation(_))
}

pub fn est_signe(jeton: &Jeton) -> bool {
    matches!(jeton, Jeton::Signe)
}

pub fn est_terminal(jeton: &Jeton) -> bool {
    matches!(jeton, Jeton::Terminal(_))
}

/* ------------------------ Littéraux canoniques ------------------------ */

const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Littéral d'affichage canonique d'un jeton (un seul par jeton).
pub fn litteral(jeton: &Jeton) -> &'static str {
    match jeton {
        // défense : l'invariant garantit 0..=9
        Jeton::Chiffre(c) => CHIFFRES[usize::from(*c % 10)],
        Jeton::Point => ".",
        Jeton::Operation(Operation::Plus) => "+",
        Jeton::Operation(Operation::Moins) => "-",
        Jeton::Operation(Operation::Fois) => "×",
        Jeton::Operation(Operation::Divise) => "÷",
        Jeton::Signe => "-",
        Jeton::Terminal(Terminal::Infini) => "Infinity",
        Jeton::Terminal(Terminal::Erreur) => "Error",
    }
}

/* ------------------------ Termes ------------------------ */

/// Dernier terme : plus longue tranche finale SANS opérateur
/// (l'opérande en cours de saisie, signe inclus).
pub fn dernier_terme(jetons: &[Jeton]) -> &[Jeton] {
    let debut = jetons
        .iter()
        .rposition(est_operation)
        .map_or(0, |position| position + 1);
    &jetons[debut..]
}

/* ------------------------ Concrétisation d'une entrée ------------------------ */

/// Transforme une entrée validée en jeton, selon le contexte :
/// un moins en tête d'expression ou juste après un opérateur devient un Signe.
pub fn concretiser(entree: Entree, jetons: &[Jeton]) -> Jeton {
    match entree {
        Entree::Chiffre(c) => Jeton::Chiffre(c),
        Entree::Point => Jeton::Point,
        Entree::Operation(Operation::Moins)
            if jetons.is_empty() || matches!(jetons.last(), Some(Jeton::Operation(_))) =>
        {
            Jeton::Signe
        }
        Entree::Operation(operation) => Jeton::Operation(operation),
    }
}

/* ------------------------ Tests ------------------------ */
