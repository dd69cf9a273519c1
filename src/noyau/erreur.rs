// src/noyau/erreur.rs
//
// Erreurs du noyau (domaine d’entrée + configuration)
// ---------------------------------------------------
// Une seule énumération pour tout le noyau : la vue et la CLI
// affichent le message tel quel.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("angle invalide : {0:?}")]
    AngleInvalide(String),

    #[error("angle trop long : {chiffres} chiffres, maximum {max}")]
    AngleTropLong { chiffres: usize, max: usize },

    #[error("angle non représentable en f64")]
    AngleNonRepresentable,

    #[error("factorielle : argument négatif ({0})")]
    FactorielleNegative(i64),

    #[error("factorielle : dépassement de capacité pour {0}!")]
    DepassementFactorielle(i64),

    #[error("puissance : exposant négatif ({0})")]
    ExposantNegatif(i64),

    #[error("nombre de termes nul (au moins 1 terme)")]
    TermesNuls,

    #[error("trop de termes : {demandes} demandés, maximum {max}")]
    TropDeTermes { demandes: u32, max: u32 },

    #[error("taille de mot trop grande : {demandee} > {max}")]
    TailleMotTropGrande { demandee: u8, max: u8 },

    #[error("taille de mot nulle : aucun registre adressable")]
    TailleMotNulle,

    #[error("programme trop long : {longueur} octets, mémoire {max} octets")]
    ProgrammeTropLong { longueur: u16, max: u16 },

    #[error("registres insuffisants : {utilises} utilisés, {disponibles} disponibles")]
    RegistresInsuffisants { utilises: u32, disponibles: u32 },

    #[error("base invalide : {0:?}")]
    BaseInvalide(String),

    #[error("mode invalide : {0:?}")]
    ModeInvalide(String),
}
