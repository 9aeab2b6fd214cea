// File: crates/pricing-core/tests/legend.rs
// Purpose: Legend hover/toggle state machine and legend item view models.

use pricing_core::legend::{DIMMED_OPACITY, DISABLED_BACKGROUND};
use pricing_core::{sample, LegendState, PricingType, SeriesDescriptor};

use PricingType::{City, District, ObjectId};

fn opacity(legend: &LegendState, t: PricingType) -> f32 {
    legend.get(t).expect("series present").opacity
}

fn active(legend: &LegendState, t: PricingType) -> bool {
    legend.get(t).expect("series present").active
}

#[test]
fn prepared_series_start_visible_at_full_opacity() {
    let legend = LegendState::new(&sample::default_types());
    assert_eq!(legend.types().len(), 3);
    for p in legend.types() {
        assert_eq!(p.opacity, 1.0);
        assert!(p.active);
    }
    assert_eq!(legend.active_types(), vec![District, City, ObjectId]);
}

#[test]
fn hover_dims_every_other_active_series() {
    let mut legend = LegendState::new(&sample::default_types());
    legend.hover_enter(City);
    assert_eq!(opacity(&legend, City), 1.0);
    assert_eq!(opacity(&legend, District), DIMMED_OPACITY);
    assert_eq!(opacity(&legend, ObjectId), DIMMED_OPACITY);
    assert_eq!(legend.hovered(), Some(City));
}

#[test]
fn hover_leaves_hidden_series_untouched() {
    let mut legend = LegendState::new(&sample::default_types());
    legend.toggle(ObjectId);
    legend.hover_enter(City);
    assert_eq!(opacity(&legend, District), DIMMED_OPACITY);
    assert_eq!(opacity(&legend, ObjectId), 1.0);
    assert!(!active(&legend, ObjectId));
}

#[test]
fn hover_on_hidden_series_is_ignored() {
    let mut legend = LegendState::new(&sample::default_types());
    legend.toggle(City);
    let before = legend.clone();
    legend.hover_enter(City);
    assert_eq!(legend, before);
}

#[test]
fn hover_leave_restores_full_opacity_everywhere() {
    let mut legend = LegendState::new(&sample::default_types());
    legend.toggle(ObjectId);
    legend.hover_enter(District);
    legend.hover_leave();
    for p in legend.types() {
        assert_eq!(p.opacity, 1.0);
    }
    assert_eq!(legend.hovered(), None);
    assert!(!active(&legend, ObjectId));
}

#[test]
fn toggling_twice_restores_visibility() {
    let mut legend = LegendState::new(&sample::default_types());
    legend.toggle(District);
    assert!(!active(&legend, District));
    assert_eq!(legend.active_types(), vec![City, ObjectId]);
    legend.toggle(District);
    assert!(active(&legend, District));
    assert_eq!(legend.active_types(), vec![District, City, ObjectId]);
}

#[test]
fn toggling_keeps_identity_and_color() {
    let types = sample::default_types();
    let mut legend = LegendState::new(&types);
    legend.toggle(City);
    let city = legend.get(City).unwrap();
    assert_eq!(city.descriptor, types[1]);
}

#[test]
fn hiding_the_hovered_series_clears_dimming() {
    let mut legend = LegendState::new(&sample::default_types());
    legend.hover_enter(City);
    legend.toggle(City);
    for p in legend.types() {
        assert_eq!(p.opacity, 1.0, "{} should not stay dimmed", p.type_name());
    }

    // still under the pointer: showing it again dims the others again
    legend.toggle(City);
    assert_eq!(opacity(&legend, District), DIMMED_OPACITY);
    assert_eq!(opacity(&legend, City), 1.0);
}

#[test]
fn no_series_is_hidden_and_dimmed() {
    let mut legend = LegendState::new(&sample::default_types());
    legend.hover_enter(City);
    legend.toggle(District);
    let district = legend.get(District).unwrap();
    assert!(!district.active);
    assert_eq!(district.opacity, 1.0);
}

#[test]
fn replacing_types_discards_interaction_state() {
    let mut legend = LegendState::new(&sample::default_types());
    legend.toggle(District);
    legend.hover_enter(City);

    legend.replace_types(&sample::default_types());
    assert_eq!(legend.hovered(), None);
    for p in legend.types() {
        assert_eq!(p.opacity, 1.0);
        assert!(p.active);
    }
}

#[test]
fn duplicate_identifiers_keep_the_first_descriptor() {
    let legend = LegendState::new(&[
        SeriesDescriptor::new(City, "#111").named("first"),
        SeriesDescriptor::new(City, "#222").named("second"),
    ]);
    assert_eq!(legend.types().len(), 1);
    assert_eq!(legend.get(City).unwrap().descriptor.color, "#111");
}

#[test]
fn legend_items_reflect_state() {
    let mut types = sample::default_types();
    types.push(SeriesDescriptor::new(PricingType::AddCity, "rgb(41, 143, 202)").dashed());
    let mut legend = LegendState::new(&types);
    legend.toggle(ObjectId);
    legend.hover_enter(City);

    let items = legend.items();
    // unnamed delta series has no legend entry
    assert_eq!(items.len(), 3);

    let district = &items[0];
    assert_eq!(district.label, "By district");
    assert!(district.dimmed);
    assert!(!district.disabled);
    assert_eq!(district.background, "rgba(254, 171, 76, 0.1)");

    let city = &items[1];
    assert!(!city.dimmed);

    let object = &items[2];
    assert!(object.disabled);
    assert!(!object.dimmed);
    assert_eq!(object.background, DISABLED_BACKGROUND);
}
