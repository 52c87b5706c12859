//! Block masses and the grid mass estimator.

use std::fmt;
use std::str::FromStr;

use lift_core::SizeClass;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Block families the mass estimator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    LightArmorBlock,
    HeavyArmorBlock,
    SteelPlate,
    InteriorPlate,
    CargoContainer,
    Refinery,
    Assembler,
    Reactor,
}

/// Grouping used when listing blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockCategory {
    Armor,
    Structural,
    Functional,
}

impl BlockCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Armor => "Armor Blocks",
            Self::Structural => "Structural Blocks",
            Self::Functional => "Functional Blocks",
        }
    }
}

impl BlockType {
    pub const ALL: [BlockType; 8] = [
        Self::LightArmorBlock,
        Self::HeavyArmorBlock,
        Self::SteelPlate,
        Self::InteriorPlate,
        Self::CargoContainer,
        Self::Refinery,
        Self::Assembler,
        Self::Reactor,
    ];

    /// Snake-case identifier (`light_armor_block`).
    pub fn key(self) -> &'static str {
        match self {
            Self::LightArmorBlock => "light_armor_block",
            Self::HeavyArmorBlock => "heavy_armor_block",
            Self::SteelPlate => "steel_plate",
            Self::InteriorPlate => "interior_plate",
            Self::CargoContainer => "cargo_container",
            Self::Refinery => "refinery",
            Self::Assembler => "assembler",
            Self::Reactor => "reactor",
        }
    }

    /// Title-cased display name (`Light Armor Block`).
    pub fn label(self) -> String {
        self.key()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn category(self) -> BlockCategory {
        match self {
            Self::LightArmorBlock | Self::HeavyArmorBlock => BlockCategory::Armor,
            Self::SteelPlate | Self::InteriorPlate => BlockCategory::Structural,
            Self::CargoContainer | Self::Refinery | Self::Assembler | Self::Reactor => {
                BlockCategory::Functional
            }
        }
    }

    /// Mass of one block of this type (kg).
    pub fn mass_kg(self, size: SizeClass) -> f64 {
        let (small, large) = match self {
            Self::LightArmorBlock => (25.0, 1_220.0),
            Self::HeavyArmorBlock => (87.0, 4_170.0),
            Self::SteelPlate => (20.0, 980.0),
            Self::InteriorPlate => (3.0, 120.0),
            Self::CargoContainer => (128.0, 2_175.0),
            Self::Refinery => (2_000.0, 15_400.0),
            Self::Assembler => (1_000.0, 3_360.0),
            Self::Reactor => (368.0, 4_860.0),
        };
        match size {
            SizeClass::Small => small,
            SizeClass::Large => large,
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("unknown block type '{0}'")]
    UnknownBlock(String),
    #[error("invalid block count '{0}' (expected <block>=<small>,<large>)")]
    InvalidCount(String),
}

impl FromStr for BlockType {
    type Err = BlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|block| block.key() == wanted)
            .ok_or_else(|| BlockError::UnknownBlock(s.to_string()))
    }
}

/// Number of blocks of one type, split by size class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockCount {
    pub small: u32,
    pub large: u32,
}

impl BlockCount {
    pub fn new(small: u32, large: u32) -> Self {
        Self { small, large }
    }
}

/// One line of a block inventory, e.g. `steel_plate=10,2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockEntry {
    pub block: BlockType,
    pub count: BlockCount,
}

impl FromStr for BlockEntry {
    type Err = BlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BlockError::InvalidCount(s.to_string());
        let (name, counts) = s.split_once('=').ok_or_else(invalid)?;
        let block: BlockType = name.parse()?;
        let (small, large) = match counts.split_once(',') {
            Some((small, large)) => (small.trim(), large.trim()),
            None => (counts.trim(), "0"),
        };
        let small = small.parse().map_err(|_| invalid())?;
        let large = large.parse().map_err(|_| invalid())?;
        Ok(BlockEntry {
            block,
            count: BlockCount::new(small, large),
        })
    }
}

/// Mass of a single inventory line (kg).
pub fn entry_mass_kg(block: BlockType, count: BlockCount) -> f64 {
    f64::from(count.small) * block.mass_kg(SizeClass::Small)
        + f64::from(count.large) * block.mass_kg(SizeClass::Large)
}

/// Total mass of a block inventory (kg). Repeated block types accumulate.
pub fn calculate_total_mass(entries: &[BlockEntry]) -> f64 {
    entries
        .iter()
        .map(|entry| entry_mass_kg(entry.block, entry.count))
        .sum()
}
