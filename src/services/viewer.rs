// src/services/viewer.rs

//! Read-only filtering of hazard statuses and relief camps.

use crate::models::{DistrictStatus, HazardFilter, ReliefCamp, normalize_district};

/// Statuses whose hazard falls under `filter`, in input order.
pub fn filter_statuses(statuses: &[DistrictStatus], filter: HazardFilter) -> Vec<&DistrictStatus> {
    statuses
        .iter()
        .filter(|status| filter.matches(status.hazard))
        .collect()
}

/// Camps in `district`, or every camp when no district is selected.
pub fn filter_camps<'a>(camps: &'a [ReliefCamp], district: Option<&str>) -> Vec<&'a ReliefCamp> {
    let wanted = district.map(normalize_district).filter(|d| !d.is_empty());
    camps
        .iter()
        .filter(|camp| match &wanted {
            Some(wanted) => normalize_district(&camp.district) == *wanted,
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HazardCategory, StaticReference};

    #[test]
    fn flood_filter_returns_flood_subset() {
        let data = StaticReference::default();
        let filter: HazardFilter = "Flood".parse().unwrap();

        let ids: Vec<&str> = filter_statuses(&data.statuses, filter)
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();

        assert_eq!(ids, vec!["colombo-flood", "gampaha-flood", "ratnapura-flood"]);
    }

    #[test]
    fn landslide_filter_excludes_floods() {
        let data = StaticReference::default();
        let matched = filter_statuses(&data.statuses, HazardFilter::Landslide);

        assert_eq!(matched.len(), 2);
        assert!(
            matched
                .iter()
                .all(|s| s.hazard.category() == HazardCategory::Landslide)
        );
    }

    #[test]
    fn all_filter_keeps_everything() {
        let data = StaticReference::default();
        assert_eq!(filter_statuses(&data.statuses, HazardFilter::All).len(), 5);
    }

    #[test]
    fn camp_filter_is_case_insensitive() {
        let data = StaticReference::default();
        let matched = filter_camps(&data.camps, Some("KEGALLE"));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Kegalle Temple Premises Camp");
    }

    #[test]
    fn empty_district_means_all_camps() {
        let data = StaticReference::default();
        assert_eq!(filter_camps(&data.camps, Some("")).len(), 3);
        assert_eq!(filter_camps(&data.camps, None).len(), 3);
        assert!(filter_camps(&data.camps, Some("jaffna")).is_empty());
    }
}
