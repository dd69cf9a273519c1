// src/noyau/angle.rs
//
// Lecture d’un angle décimal (radians) : "1.8", "-0.5", ".25", "3"
// -> rationnel exact (1.8 = 9/5) ; la version f64 en dérive.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use super::erreur::ErreurNoyau;

/// Garde-fou : chiffres significatifs d’un angle (entier + décimales).
///
/// La série exacte élève le dénominateur 10^decimales jusqu’à la puissance 33 :
/// sans borne, un angle de quelques milliers de décimales gèle l’UI.
pub const CHIFFRES_ANGLE_MAX: usize = 30;

pub fn lire_angle(s: &str) -> Result<BigRational, ErreurNoyau> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ErreurNoyau::EntreeVide);
    }

    let invalide = || ErreurNoyau::AngleInvalide(s.to_string());

    let nb_chiffres = s.chars().filter(char::is_ascii_digit).count();
    if nb_chiffres > CHIFFRES_ANGLE_MAX {
        return Err(ErreurNoyau::AngleTropLong {
            chiffres: nb_chiffres,
            max: CHIFFRES_ANGLE_MAX,
        });
    }

    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    // signe optionnel
    let negatif = match chars[0] {
        '-' => {
            i += 1;
            true
        }
        '+' => {
            i += 1;
            false
        }
        _ => false,
    };

    let mut mantisse = BigInt::zero();
    let mut decimales: u32 = 0;
    let mut chiffres_vus = false;
    let mut point_vu = false;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '0'..='9' => {
                let d = c.to_digit(10).ok_or_else(invalide)?;
                mantisse = mantisse * 10u32 + BigInt::from(d);
                if point_vu {
                    decimales += 1;
                }
                chiffres_vus = true;
            }
            '.' if !point_vu => point_vu = true,
            _ => return Err(invalide()),
        }
        i += 1;
    }

    if !chiffres_vus {
        return Err(invalide());
    }

    if negatif {
        mantisse = -mantisse;
    }

    let denom = BigInt::from(10).pow(decimales);
    Ok(BigRational::new(mantisse, denom))
}

pub fn vers_f64(r: &BigRational) -> Result<f64, ErreurNoyau> {
    r.to_f64()
        .filter(|x| x.is_finite())
        .ok_or(ErreurNoyau::AngleNonRepresentable)
}
