//! Noyau Voyager
//!
//! Organisation interne :
//! - erreur.rs   : ErreurNoyau (domaine d’entrée + configuration)
//! - serie.rs    : factorielle, puissance, sinus par série de Taylor (f32/f64)
//! - exact.rs    : même série en rationnels exacts
//! - angle.rs    : lecture d’un angle décimal
//! - lecture.rs  : "%f" + lecture décimale tronquée
//! - mode.rs     : Configuration (1C/2C/U, taille de mot, base)
//! - eval.rs     : pipeline complet

pub mod angle;
pub mod erreur;
pub mod eval;
pub mod exact;
pub mod lecture;
pub mod mode;
pub mod serie;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurNoyau;
pub use eval::{calcule_sinus, CHIFFRES_DEFAUT, CHIFFRES_MAX};
pub use mode::{Base, Configuration, Mode};
pub use serie::{ANGLE_REFERENCE, TERMES_MAX, TERMES_REFERENCE};
