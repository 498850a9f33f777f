//! Per-airport VMC minima table.
//!
//! Every tracked airport maps to the ceiling/visibility pair at or above
//! which conditions qualify as VMC there. The values encode operational
//! minimums and must not be adjusted without a source update.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// VMC minima for one airport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirportMinima {
    /// Ceiling in feet at or above which conditions may qualify as VMC
    pub min_ceiling_ft: u32,
    /// Visibility in statute miles at or above which conditions may qualify as VMC
    pub min_visibility_sm: f64,
}

/// Airports with individually surveyed minima.
const AIRPORT_MINIMA: &[(&str, u32, f64)] = &[
    ("ABQ", 3000, 5.0),
    ("ANC", 3000, 5.0),
    ("ATL", 3600, 7.0),
    ("AUS", 3500, 3.0),
    ("BDL", 3000, 7.0),
    ("BHM", 2400, 3.0),
    ("BNA", 2600, 3.0),
    ("BOS", 2500, 3.0),
    ("BUF", 2300, 3.0),
    ("BUR", 3500, 3.0),
    ("BWI", 2500, 5.0),
    ("CLE", 2600, 3.0),
    ("CLT", 3600, 5.0),
    ("CVG", 2900, 3.0),
    ("DAL", 2400, 3.0),
    ("DAY", 2800, 3.0),
    ("DCA", 3000, 4.0),
    ("DEN", 2000, 3.0),
    ("DFW", 3500, 5.0),
    ("DTW", 3000, 5.0),
    ("EWR", 3000, 4.0),
    ("FLL", 4000, 5.0),
    ("GYY", 1000, 3.0),
    ("HNL", 2500, 3.0),
    ("HOU", 2100, 3.0),
    ("HPN", 3500, 5.0),
    ("IAD", 3000, 7.0),
    ("IAH", 4000, 8.0),
    ("IND", 2200, 3.0),
    ("ISP", 2500, 5.0),
    ("JAX", 2100, 3.0),
    ("JFK", 2000, 4.0),
    ("LAS", 5000, 5.0),
    ("LAX", 2500, 3.0),
    ("LGA", 3200, 4.0),
    ("LGB", 2100, 3.0),
    ("MCI", 2000, 3.0),
    ("MCO", 2500, 3.0),
    ("MDW", 1900, 3.0),
    ("MEM", 5000, 5.0),
    ("MHT", 2500, 5.0),
    ("MIA", 2000, 5.0),
    ("MKE", 2300, 3.0),
    ("MSP", 3500, 8.0),
    ("MSY", 2000, 5.0),
    ("OAK", 2500, 8.0),
    ("OMA", 2500, 5.0),
    ("ONT", 3000, 3.0),
    ("ORD", 1900, 3.0),
    ("OXR", 1000, 3.0),
    ("PBI", 2000, 3.0),
    ("PDX", 3500, 8.0),
    ("PHL", 2300, 4.0),
    ("PHX", 3300, 7.0),
    ("PIT", 1800, 3.0),
    ("PVD", 2000, 3.0),
    ("RDU", 4000, 5.0),
    ("RFD", 1000, 3.0),
    ("RSW", 2100, 3.0),
    ("SAN", 2000, 3.0),
    ("SAT", 3000, 5.0),
    ("SDF", 3000, 3.0),
    ("SEA", 4000, 3.0),
    ("SFO", 3500, 8.0),
    ("SJC", 2500, 5.0),
    ("SLC", 5300, 3.0),
    ("SNA", 3000, 5.0),
    ("STL", 5000, 5.0),
    ("SWF", 1000, 3.0),
    ("TEB", 3500, 5.0),
    ("TPA", 2100, 3.0),
    ("TUS", 7500, 3.0),
    ("VNY", 1000, 3.0),
];

/// Shared default minima for the remaining tracked airports.
const DEFAULT_MINIMA: AirportMinima = AirportMinima {
    min_ceiling_ft: 3000,
    min_visibility_sm: 5.0,
};

/// Airports that share [`DEFAULT_MINIMA`].
const DEFAULT_MINIMA_AIRPORTS: &[&str] = &[
    "ALB", "BOI", "BFL", "BTR", "CHS", "CMH", "COS", "CRP", "DAB", "DSM", "ELP", "EUG", "FAT",
    "FNT", "FXE", "GFK", "GRR", "GSO", "ICT", "JNU", "LAN", "LIT", "MLB", "MSN", "ORF", "OKC",
    "PHF", "PIE", "RIC", "RNO", "ROC", "SBA", "SMF", "SYR", "TUL", "TVC", "TYS",
];

/// Read-only mapping from airport code to its VMC minima.
///
/// Built once and never mutated, so a single instance can be shared across
/// any number of concurrent callers without locking.
#[derive(Debug, Clone)]
pub struct MinimaTable {
    minima: HashMap<&'static str, AirportMinima>,
}

impl Default for MinimaTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimaTable {
    /// Build the table from the compiled-in minima data.
    pub fn new() -> Self {
        let mut minima = HashMap::with_capacity(
            AIRPORT_MINIMA.len() + DEFAULT_MINIMA_AIRPORTS.len(),
        );
        for &(code, min_ceiling_ft, min_visibility_sm) in AIRPORT_MINIMA {
            minima.insert(
                code,
                AirportMinima {
                    min_ceiling_ft,
                    min_visibility_sm,
                },
            );
        }
        for &code in DEFAULT_MINIMA_AIRPORTS {
            minima.insert(code, DEFAULT_MINIMA);
        }
        Self { minima }
    }

    /// Process-wide table, built on first use.
    pub fn standard() -> &'static MinimaTable {
        static TABLE: OnceLock<MinimaTable> = OnceLock::new();
        TABLE.get_or_init(MinimaTable::new)
    }

    /// Look up the VMC minima for an airport code (case-sensitive).
    pub fn lookup(&self, airport: &str) -> Option<&AirportMinima> {
        self.minima.get(airport)
    }

    /// Number of airports in the table.
    pub fn len(&self) -> usize {
        self.minima.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minima.is_empty()
    }

    /// Iterate over all tracked airport codes.
    pub fn airports(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.minima.keys().copied()
    }
}
