// src/noyau/format.rs
//
// Texte décimal canonique d'un résultat numérique.
//
// Arrondi demi-supérieur (à la convention calculatrice) à N décimales,
// puis normalisation : zéros de fin retirés, point orphelin retiré,
// "-0" ramené à "0". Le texte produit repasse TOUJOURS par l'analyseur,
// ce qui garantit la cohérence avec la grammaire d'affichage.

/// Précision maximale admise (garde-fou anti-abus : au-delà, f64 ne
/// distingue plus rien d'utile).
pub const PRECISION_MAX: u32 = 12;

/// Au-delà de cette magnitude, f64 n'a plus de partie fractionnaire :
/// l'étape d'arrondi à l'échelle serait du bruit (voire un débordement).
const SEUIL_ARRONDI: f64 = 1e15;

/// Arrondit `valeur` à `decimales` (demi-supérieur) et rend le texte canonique.
/// Ne doit recevoir que des valeurs finies (les marqueurs terminaux sont
/// traités en amont, dans l'évaluateur).
pub fn formater_arrondi(valeur: f64, decimales: u32) -> String {
    let decimales = decimales.min(PRECISION_MAX);

    let arrondi = if valeur.abs() < SEUIL_ARRONDI {
        let facteur = 10f64.powi(decimales as i32);
        (valeur * facteur).round() / facteur
    } else {
        valeur
    };

    let mut texte = format!("{arrondi:.precision$}", precision = decimales as usize);

    if texte.contains('.') {
        while texte.ends_with('0') {
            texte.pop();
        }
        if texte.ends_with('.') {
            texte.pop();
        }
    }

    // normalise le zéro signé (-0.004 arrondi à 2 => "0", pas "-0")
    if texte == "-0" {
        texte = "0".to_string();
    }

    texte
}

/* ------------------------ Tests ------------------------ */
