// src/noyau/lecture.rs
//
// Lectures décimales
// - format_fixe : comme printf("%f") (arrondi, nombre de décimales fixe)
// - scaled_to_decimal : lecture tronquée d’un rationnel exact

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

/// Décimales de la ligne de référence ("%f").
pub const DECIMALES_REFERENCE: usize = 6;

/// Rend `x` avec `decimales` chiffres après la virgule (arrondi).
pub fn format_fixe(x: f64, decimales: usize) -> String {
    format!("{x:.decimales$}")
}

/// Ligne imprimée par l’invocation de référence (sans le saut de ligne).
pub fn ligne_reference(x: f64) -> String {
    format_fixe(x, DECIMALES_REFERENCE)
}

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// r -> entier “scalé” = r * 10^digits, tronqué vers zéro
pub fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    let scale = pow10(digits);
    (r.numer() * scale) / r.denom()
}

/// Lecture tronquée d’un rationnel avec `digits` décimales.
pub fn lecture_tronquee(r: &BigRational, digits: usize) -> String {
    scaled_to_decimal(rational_scaled(r, digits), digits)
}
