//! Noyau — évaluation (pipeline réel)
//!
//! texte -> angle exact (BigRational) -> f64
//!       -> série flottante terme à terme (démarche) -> valeur + ligne "%f"
//!       -> série exacte -> lecture tronquée
//!
//! Remarque : l’écart à sin(x) est mesuré avec f64::sin, à titre d’information
//! seulement (la série n’a pas de contrôle de convergence).

use log::info;

use super::angle::{lire_angle, vers_f64};
use super::erreur::ErreurNoyau;
use super::exact::approx_sinus_exacte;
use super::lecture::{format_fixe, lecture_tronquee, ligne_reference};
use super::serie::{approx_sinus_demarche, TermeSerie};

/// Précision de la lecture exacte par défaut.
pub const CHIFFRES_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const CHIFFRES_MAX: usize = 200;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub termes: Vec<String>,
    pub ecart: f64,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct ResultatSinus {
    /// Somme partielle flottante.
    pub valeur: f64,
    /// Ligne de référence, six décimales.
    pub ligne: String,
    /// Somme partielle exacte ("p/q").
    pub exact: String,
    /// Lecture tronquée de la somme exacte.
    pub lecture: String,
    pub demarche: DemarcheNoyau,
}

/// API publique : approxime sin(angle) avec `termes` termes.
pub fn calcule_sinus(
    angle_txt: &str,
    termes: u32,
    chiffres: usize,
) -> Result<ResultatSinus, ErreurNoyau> {
    let chiffres = chiffres.min(CHIFFRES_MAX);

    // 1) angle
    let angle_exact = lire_angle(angle_txt)?;
    let angle = vers_f64(&angle_exact)?;

    // 2) série flottante (bornes sur termes vérifiées ici)
    let d = approx_sinus_demarche(angle, termes)?;
    let valeur = d.last().map(|t| t.somme).unwrap_or(0.0);

    // 3) série exacte
    let exact = approx_sinus_exacte(&angle_exact, termes)?;

    let ecart = (valeur - angle.sin()).abs();
    info!("sin({angle}) ≈ {valeur} avec {termes} termes (écart {ecart:e})");

    let demarche = DemarcheNoyau {
        termes: d.iter().map(format_terme).collect(),
        ecart,
        note: "Série: Σ (-1)^n · x^(2n+1) / (2n+1)!, sans réduction d’angle.".into(),
    };

    Ok(ResultatSinus {
        valeur,
        ligne: ligne_reference(valeur),
        exact: exact.to_string(),
        lecture: lecture_tronquee(&exact, chiffres),
        demarche,
    })
}

/// Une ligne de démarche par terme :
/// "n=1 : -x^3/3! = -(5.832000/6) = -0.972000 → Σ = 0.828000"
pub fn format_terme(t: &TermeSerie<f64>) -> String {
    let op = if t.signe < 0.0 { "-" } else { "+" };
    format!(
        "n={} : {op}x^{}/{}! = {op}({}/{}) = {} → Σ = {}",
        t.n,
        t.exposant,
        t.exposant,
        format_fixe(t.puissance, 6),
        t.factorielle,
        format_fixe(t.terme, 6),
        format_fixe(t.somme, 6)
    )
}
