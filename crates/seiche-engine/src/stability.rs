//! CFL stability limit and timestep selection.

use crate::error::SolveError;
use crate::report::SolveWarning;
use seiche_grid::TimeAxis;

/// The CFL stability limit for an explicit 2D wave scheme,
///
/// ```text
/// dt_max = 1 / ( c · sqrt(1/dx² + 1/dy²) )
/// ```
///
/// where `c` bounds the fastest local wave speed. With a spatially
/// varying medium the engine passes `sqrt(max q)` sampled over the
/// whole mesh, so the limit always covers the fastest point.
pub fn stability_limit(max_speed: f64, dx: f64, dy: f64) -> f64 {
    1.0 / (max_speed * (1.0 / (dx * dx) + 1.0 / (dy * dy)).sqrt())
}

/// Resolve the caller's timestep request against the stability limit.
///
/// Negative `requested` means auto: `|requested|` is the safety factor
/// applied to the limit. A positive `requested` above the limit is
/// either recorded as a warning (permissive) or fatal (`strict`).
pub(crate) fn select_timestep(
    requested: f64,
    limit: f64,
    t_end: f64,
    strict: bool,
) -> Result<(TimeAxis, Option<SolveWarning>), SolveError> {
    if requested < 0.0 {
        let dt = -requested * limit;
        return Ok((TimeAxis::new(dt, t_end), None));
    }
    if requested > limit {
        if strict {
            return Err(SolveError::StabilityExceeded {
                dt: requested,
                limit,
            });
        }
        return Ok((
            TimeAxis::new(requested, t_end),
            Some(SolveWarning::StabilityExceeded {
                dt: requested,
                limit,
            }),
        ));
    }
    Ok((TimeAxis::new(requested, t_end), None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn limit_matches_closed_form() {
        // dx = dy = 0.5, c = 2: 1/(2·sqrt(8)) = 0.1767766...
        let limit = stability_limit(2.0, 0.5, 0.5);
        assert!((limit - 1.0 / (2.0 * 8.0f64.sqrt())).abs() < 1e-15);
    }

    #[test]
    fn auto_selection_scales_by_safety_factor() {
        let limit = 0.2;
        let (axis, warning) = select_timestep(-0.5, limit, 1.0, false).unwrap();
        assert!((axis.dt() - 0.1).abs() < 1e-15);
        assert!(warning.is_none());
    }

    #[test]
    fn default_request_uses_the_full_limit() {
        let limit = 0.2;
        let (axis, _) = select_timestep(-1.0, limit, 1.0, false).unwrap();
        assert_eq!(axis.dt(), limit);
    }

    #[test]
    fn oversized_request_warns_once_in_permissive_mode() {
        let (axis, warning) = select_timestep(0.3, 0.2, 1.0, false).unwrap();
        assert_eq!(axis.dt(), 0.3);
        assert_eq!(
            warning,
            Some(SolveWarning::StabilityExceeded { dt: 0.3, limit: 0.2 })
        );
    }

    #[test]
    fn oversized_request_is_fatal_in_strict_mode() {
        assert!(matches!(
            select_timestep(0.3, 0.2, 1.0, true),
            Err(SolveError::StabilityExceeded { dt, limit })
                if dt == 0.3 && limit == 0.2
        ));
    }

    #[test]
    fn request_at_the_limit_is_accepted_silently() {
        let (axis, warning) = select_timestep(0.2, 0.2, 1.0, true).unwrap();
        assert_eq!(axis.dt(), 0.2);
        assert!(warning.is_none());
    }

    proptest! {
        #[test]
        fn auto_selection_never_exceeds_the_limit(
            factor in 0.05f64..=1.0,
            limit in 1e-3f64..10.0,
        ) {
            let (axis, warning) = select_timestep(-factor, limit, 10.0 * limit, true).unwrap();
            prop_assert!(axis.dt() <= limit * (1.0 + 1e-12));
            prop_assert!(warning.is_none());
        }

        #[test]
        fn permissive_mode_warns_exactly_when_oversized(
            dt in 1e-3f64..10.0,
            limit in 1e-3f64..10.0,
        ) {
            let (axis, warning) = select_timestep(dt, limit, 50.0, false).unwrap();
            prop_assert_eq!(axis.dt(), dt);
            prop_assert_eq!(warning.is_some(), dt > limit);
        }
    }
}
