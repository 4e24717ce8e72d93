// src/noyau/stockage.rs
//
// Forme persistée de l'état de session, pour le collaborateur de stockage
// externe (clé-valeur côté hôte).
//
// Format hérité, à conserver tel quel :
// - chaque jeton est stocké sous son NOM ("plus", "negative", "dividedBy", …),
//   pas sous son littéral d'affichage
// - l'état est l'objet { "parsed": [...], "stringified": "..." }
// - absent au chargement => état vierge { [], "" }
//
// Au chargement, la cohérence affichage/jetons est re-vérifiée : un stockage
// trafiqué ne doit jamais produire un état silencieusement faux.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::erreurs::ErreurNoyau;
use super::etat::EtatSession;
use super::jetons::{Jeton, Operation, Terminal};
use super::lecture::stringifier;

/* ------------------------ Noms de stockage des jetons ------------------------ */

fn nom_stockage(jeton: &Jeton) -> &'static str {
    const NOMS_CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
    match jeton {
        Jeton::Chiffre(c) => NOMS_CHIFFRES[usize::from(*c % 10)],
        Jeton::Point => ".",
        Jeton::Operation(Operation::Plus) => "plus",
        Jeton::Operation(Operation::Moins) => "minus",
        Jeton::Operation(Operation::Fois) => "times",
        Jeton::Operation(Operation::Divise) => "dividedBy",
        Jeton::Signe => "negative",
        Jeton::Terminal(Terminal::Infini) => "Infinity",
        Jeton::Terminal(Terminal::Erreur) => "Error",
    }
}

fn jeton_depuis_nom(nom: &str) -> Option<Jeton> {
    if let Some(chiffre) = nom.parse::<u8>().ok().filter(|c| *c <= 9) {
        return Some(Jeton::Chiffre(chiffre));
    }
    match nom {
        "." => Some(Jeton::Point),
        "plus" => Some(Jeton::Operation(Operation::Plus)),
        "minus" => Some(Jeton::Operation(Operation::Moins)),
        "times" => Some(Jeton::Operation(Operation::Fois)),
        "dividedBy" => Some(Jeton::Operation(Operation::Divise)),
        "negative" => Some(Jeton::Signe),
        "Infinity" => Some(Jeton::Terminal(Terminal::Infini)),
        "Error" => Some(Jeton::Terminal(Terminal::Erreur)),
        _ => None,
    }
}

impl Serialize for Jeton {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(nom_stockage(self))
    }
}

struct JetonVisitor;

impl Visitor<'_> for JetonVisitor {
    type Value = Jeton;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("un nom de jeton (\"0\"–\"9\", \".\", \"plus\", \"negative\", …)")
    }

    fn visit_str<E: de::Error>(self, nom: &str) -> Result<Jeton, E> {
        jeton_depuis_nom(nom)
            .ok_or_else(|| E::custom(format!("nom de jeton inconnu: {nom:?}")))
    }
}

impl<'de> Deserialize<'de> for Jeton {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Jeton, D::Error> {
        deserializer.deserialize_str(JetonVisitor)
    }
}

/* ------------------------ Erreur de stockage ------------------------ */

#[derive(Debug)]
pub enum ErreurStockage {
    /// JSON illisible ou nom de jeton inconnu.
    Json(serde_json::Error),
    /// État relu incohérent (stringified ≠ rendu des jetons).
    Etat(ErreurNoyau),
}

impl fmt::Display for ErreurStockage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurStockage::Json(e) => write!(f, "stockage illisible: {e}"),
            ErreurStockage::Etat(e) => write!(f, "état persisté incohérent: {e}"),
        }
    }
}

impl std::error::Error for ErreurStockage {}

impl From<serde_json::Error> for ErreurStockage {
    fn from(e: serde_json::Error) -> Self {
        ErreurStockage::Json(e)
    }
}

impl From<ErreurNoyau> for ErreurStockage {
    fn from(e: ErreurNoyau) -> Self {
        ErreurStockage::Etat(e)
    }
}

/* ------------------------ Sauvegarde / chargement ------------------------ */

/// Sérialise l'état sous la forme héritée { parsed, stringified }.
pub fn sauvegarder(etat: &EtatSession) -> Result<String, ErreurStockage> {
    Ok(serde_json::to_string(etat)?)
}

/// Relit un état persisté. `None` (rien en stockage) => état vierge.
pub fn charger(texte: Option<&str>) -> Result<EtatSession, ErreurStockage> {
    let texte = match texte {
        None => return Ok(EtatSession::vide()),
        Some(texte) => texte,
    };

    let etat: EtatSession = serde_json::from_str(texte)?;

    let attendu = stringifier(etat.jetons());
    if attendu != etat.afficher() {
        return Err(ErreurStockage::Etat(ErreurNoyau::EtatCorrompu {
            attendu,
            trouve: etat.afficher().to_string(),
        }));
    }

    Ok(etat)
}

/* ------------------------ Tests ------------------------ */
