//! Zone summaries - best/worst zone and averages over viable zones

use super::zones::ZoneCalculation;
use crate::types::ZoneId;
use serde::{Deserialize, Serialize};

/// Headline numbers for one attacker against one defender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSummary {
    /// Zone with the lowest TTK
    pub best_zone: Option<ZoneId>,
    #[serde(with = "super::unbounded")]
    pub best_ttk: f64,
    /// Slowest viable zone, or slowest overall when none is viable
    pub worst_zone: Option<ZoneId>,
    #[serde(with = "super::unbounded")]
    pub worst_ttk: f64,
    /// Mean TTK over viable zones
    pub average_ttk: f64,
    /// Summed cost-to-kill over viable zones
    pub total_cost: f64,
    pub viable_zones: usize,
}

/// Summarize zone results
///
/// Ties resolve to the earliest zone in input order. Averages divide by the
/// number of viable zones, or by 1 when there are none.
pub fn summarize(zones: &[ZoneCalculation]) -> ZoneSummary {
    let best = fastest(zones.iter());
    let worst = slowest(zones.iter().filter(|z| z.is_viable())).or_else(|| slowest(zones.iter()));

    let viable: Vec<&ZoneCalculation> = zones.iter().filter(|z| z.is_viable()).collect();
    let denominator = viable.len().max(1) as f64;
    let average_ttk = viable.iter().map(|z| z.ttk).sum::<f64>() / denominator;
    let total_cost = viable.iter().map(|z| z.cost_to_kill).sum::<f64>();

    ZoneSummary {
        best_zone: best.map(|z| z.zone_id),
        best_ttk: best.map(|z| z.ttk).unwrap_or(f64::INFINITY),
        worst_zone: worst.map(|z| z.zone_id),
        worst_ttk: worst.map(|z| z.ttk).unwrap_or(f64::INFINITY),
        average_ttk,
        total_cost,
        viable_zones: viable.len(),
    }
}

fn fastest<'a>(zones: impl Iterator<Item = &'a ZoneCalculation>) -> Option<&'a ZoneCalculation> {
    zones.fold(None::<&'a ZoneCalculation>, |best, zone| match best {
        Some(b) if b.ttk <= zone.ttk => Some(b),
        _ => Some(zone),
    })
}

fn slowest<'a>(zones: impl Iterator<Item = &'a ZoneCalculation>) -> Option<&'a ZoneCalculation> {
    zones.fold(None::<&'a ZoneCalculation>, |worst, zone| match worst {
        Some(w) if w.ttk >= zone.ttk => Some(w),
        _ => Some(zone),
    })
}
