//! Plain-text rendering of results and lookup tables.

use std::fmt::Write;

use aurum_core::appraisal::Appraisal;
use aurum_core::geometry::Taper;
use aurum_core::materials::GoldPurity;
use aurum_core::sizes::{self, RING_SIZES};

const RULE: &str = "═══════════════════════════════════════";

/// Render an appraisal as a human-readable report.
pub fn appraisal_report(appraisal: &Appraisal) -> String {
    let input = &appraisal.input;
    let geometry = &input.geometry;
    let result = &appraisal.result;
    let cur = &appraisal.currency;

    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  RING VALUATION{}", label_suffix(&input.label));
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out);
    let _ = writeln!(out, "Input:");
    match sizes::circumference_mm(&geometry.size) {
        Ok(mm) => {
            let _ = writeln!(out, "  Size:      {} ({:.0} mm inner)", geometry.size.trim(), mm);
        }
        Err(_) => {
            let _ = writeln!(out, "  Size:      {}", geometry.size);
        }
    }
    let _ = writeln!(out, "  Width:     {:.2} mm", geometry.width_mm);
    if let Taper::Tapered { edge_width_mm } = geometry.taper {
        let _ = writeln!(out, "  Taper:     to {:.2} mm at the shank", edge_width_mm);
    }
    let _ = writeln!(out, "  Thickness: {:.2} mm", geometry.thickness_mm);
    let _ = writeln!(out, "  Profile:   {}", geometry.profile);
    let _ = writeln!(out, "  Build:     {}", input.hollow);
    let _ = writeln!(
        out,
        "  Gold:      {} ({:.2} g/cm³) at {:.2} {}/g",
        input.material.purity,
        input.material.density_g_per_cm3(),
        input.material.price_per_gram,
        cur
    );
    if let Some(estimate) = &appraisal.estimate {
        let _ = writeln!(out, "  Estimate:  {} confidence - {}", estimate.confidence, estimate.description);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Result:");
    let _ = writeln!(out, "  Volume:    {:.3} cm³", result.volume_cm3);
    let _ = writeln!(out, "  Mass:      {:.2} g", result.mass_grams);
    let _ = writeln!(out, "  Gold:      {:.2} {}", result.material_price, cur);
    let _ = writeln!(out, "  Labor:     {:.2} {}", input.labor_cost, cur);
    let _ = writeln!(out, "  TOTAL:     {:.2} {}", result.total_price, cur);

    if let Some(range) = &result.range {
        let _ = writeln!(out);
        let _ = writeln!(out, "Range (from estimated width):");
        let _ = writeln!(out, "  Volume:    {:.3} - {:.3} cm³", range.min_volume_cm3, range.max_volume_cm3);
        let _ = writeln!(out, "  Mass:      {:.2} - {:.2} g", range.min_mass_grams, range.max_mass_grams);
        let _ = writeln!(out, "  Price:     {:.2} - {:.2} {}", range.min_price, range.max_price, cur);
    }
    let _ = writeln!(out, "{}", RULE);
    out
}

fn label_suffix(label: &str) -> String {
    if label.is_empty() {
        String::new()
    } else {
        format!(" - {}", label)
    }
}

/// Render the ring size table.
pub fn sizes_table() -> String {
    let mut out = String::from("Size  Inner circumference (mm)\n");
    for (label, mm) in RING_SIZES.iter() {
        let _ = writeln!(out, "{:<5} {:.1}", label, mm);
    }
    out
}

/// Render the purity / density table.
pub fn purities_table() -> String {
    let mut out = String::from("Purity  Density (g/cm³)\n");
    for purity in GoldPurity::ALL {
        let _ = writeln!(out, "{:<7} {:.2}", purity.code(), purity.density_g_per_cm3());
    }
    out
}
