// src/noyau/mode.rs
//
// Mode de représentation (1C / 2C / U) + taille de mot + base d’entrée
// ------------------------------------------------------------------
// Pas d’état global : une Configuration appartient à qui en a besoin
// (état UI, CLI) et se passe par référence.
//
// Contrat set_mode :
// - taille_mot > TAILLE_MOT_MAX => erreur, Configuration inchangée
// - sinon mode ET taille_mot mis à jour ensemble

use std::fmt;

use log::{debug, warn};

use super::erreur::ErreurNoyau;

pub const TAILLE_MOT_MAX: u8 = 64;

/// Octets partagés entre programme et registres de données.
pub const MEMOIRE_PROGRAMME: u16 = 203;

/// La partition programme/données avance par blocs de 7 octets.
const BLOC_PROGRAMME: u16 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Complément à un (MODE_1C)
    UnComplement,
    /// Complément à deux (MODE_2C)
    DeuxComplement,
    /// Non signé (MODE_U)
    NonSigne,
}

impl Mode {
    pub const TOUS: [Mode; 3] = [Mode::UnComplement, Mode::DeuxComplement, Mode::NonSigne];

    pub fn depuis_texte(s: &str) -> Result<Self, ErreurNoyau> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1c" | "1" => Ok(Mode::UnComplement),
            "2c" | "2" => Ok(Mode::DeuxComplement),
            "u" | "0" => Ok(Mode::NonSigne),
            _ => Err(ErreurNoyau::ModeInvalide(s.to_string())),
        }
    }

    pub fn sigle(self) -> &'static str {
        match self {
            Mode::UnComplement => "1C",
            Mode::DeuxComplement => "2C",
            Mode::NonSigne => "U",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Base {
    Bin,
    Oct,
    Dec,
    Hex,
}

impl Base {
    pub const TOUTES: [Base; 4] = [Base::Bin, Base::Oct, Base::Dec, Base::Hex];

    /// Accepte la forme numérique ("2", "16") ou le nom ("bin", "hex").
    pub fn depuis_texte(s: &str) -> Result<Self, ErreurNoyau> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2" | "bin" => Ok(Base::Bin),
            "8" | "oct" => Ok(Base::Oct),
            "10" | "dec" => Ok(Base::Dec),
            "16" | "hex" => Ok(Base::Hex),
            _ => Err(ErreurNoyau::BaseInvalide(s.to_string())),
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Base::Bin => "bin",
            Base::Oct => "oct",
            Base::Dec => "dec",
            Base::Hex => "hex",
        }
    }

    pub fn numerique(self) -> u32 {
        match self {
            Base::Bin => 2,
            Base::Oct => 8,
            Base::Dec => 10,
            Base::Hex => 16,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Configuration {
    mode: Mode,
    taille_mot: u8,
    base: Base,
}

impl Default for Configuration {
    /// État de mise sous tension : 2C, 16 bits, hex.
    fn default() -> Self {
        Self {
            mode: Mode::DeuxComplement,
            taille_mot: 16,
            base: Base::Hex,
        }
    }
}

impl Configuration {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn taille_mot(&self) -> u8 {
        self.taille_mot
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn set_mode(&mut self, mode: Mode, taille_mot: u8) -> Result<(), ErreurNoyau> {
        if taille_mot > TAILLE_MOT_MAX {
            warn!(
                "set_mode refusé : taille de mot {taille_mot} > {TAILLE_MOT_MAX}, état conservé ({self})"
            );
            return Err(ErreurNoyau::TailleMotTropGrande {
                demandee: taille_mot,
                max: TAILLE_MOT_MAX,
            });
        }

        self.mode = mode;
        self.taille_mot = taille_mot;
        debug!("set_mode : {self}");
        Ok(())
    }

    pub fn set_base(&mut self, base: Base) {
        self.base = base;
        debug!("set_base : {self}");
    }

    /// Octets occupés par un registre : ceil(taille_mot / 8).
    pub fn octets_par_registre(&self) -> Result<u16, ErreurNoyau> {
        if self.taille_mot == 0 {
            return Err(ErreurNoyau::TailleMotNulle);
        }
        Ok(u16::from(self.taille_mot).div_ceil(8))
    }

    fn verifie_longueur(longueur_programme: u16) -> Result<(), ErreurNoyau> {
        if longueur_programme > MEMOIRE_PROGRAMME {
            return Err(ErreurNoyau::ProgrammeTropLong {
                longueur: longueur_programme,
                max: MEMOIRE_PROGRAMME,
            });
        }
        Ok(())
    }

    /// Registres de données restant après un programme de `longueur_programme` octets.
    pub fn registres_disponibles(&self, longueur_programme: u16) -> Result<u32, ErreurNoyau> {
        Self::verifie_longueur(longueur_programme)?;
        let libre = MEMOIRE_PROGRAMME - longueur_programme;
        let par_registre = self.octets_par_registre()?;
        Ok(u32::from(libre.div_ceil(par_registre)))
    }

    /// Octets laissés aux données : le programme est arrondi au bloc de 7 supérieur.
    pub fn partition_memoire(longueur_programme: u16) -> Result<u16, ErreurNoyau> {
        Self::verifie_longueur(longueur_programme)?;
        let occupe = longueur_programme.div_ceil(BLOC_PROGRAMME) * BLOC_PROGRAMME;
        MEMOIRE_PROGRAMME
            .checked_sub(occupe)
            .ok_or(ErreurNoyau::ProgrammeTropLong {
                longueur: longueur_programme,
                max: MEMOIRE_PROGRAMME,
            })
    }

    /// Vérifie qu’un programme utilisant `registres_utilises` registres tient en mémoire.
    pub fn verifie_registres(
        &self,
        longueur_programme: u16,
        registres_utilises: u32,
    ) -> Result<u32, ErreurNoyau> {
        let disponibles = self.registres_disponibles(longueur_programme)?;
        if registres_utilises > disponibles {
            warn!("registres insuffisants : {registres_utilises} > {disponibles} ({self})");
            return Err(ErreurNoyau::RegistresInsuffisants {
                utilises: registres_utilises,
                disponibles,
            });
        }
        Ok(disponibles)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mode={} taille_mot={} base={}",
            self.mode.sigle(),
            self.taille_mot,
            self.base.nom()
        )
    }
}
