use crate::types::PatrolRoute;

/// Degrees of latitude/longitude, WGS84.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<&PatrolRoute> for GeoPoint {
    fn from(route: &PatrolRoute) -> Self {
        Self::new(route.lat, route.lng)
    }
}

/// Smallest span a fitted bounding box may collapse to.
const MIN_SPAN_DEG: f64 = 0.5;

/// Margin added around fitted points, as a fraction of the span.
const PAD_RATIO: f64 = 0.1;

/// Viewport over the northern border regions, used when there is nothing
/// to fit.
pub const DEFAULT_BOUNDS: MapBounds = MapBounds {
    min_lat: 24.0,
    max_lat: 37.0,
    min_lng: 72.0,
    max_lng: 98.0,
};

/// Geographic bounding box for the route map viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Default for MapBounds {
    fn default() -> Self {
        DEFAULT_BOUNDS
    }
}

impl MapBounds {
    /// Fit a padded box around the given points. Degenerate spans are
    /// widened to `MIN_SPAN_DEG` so a single pin still gets a viewport.
    pub fn fit(points: &[GeoPoint]) -> Self {
        let Some(first) = points.first() else {
            return DEFAULT_BOUNDS;
        };

        let mut bounds = Self {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lng: first.lng,
            max_lng: first.lng,
        };
        for point in &points[1..] {
            bounds.min_lat = bounds.min_lat.min(point.lat);
            bounds.max_lat = bounds.max_lat.max(point.lat);
            bounds.min_lng = bounds.min_lng.min(point.lng);
            bounds.max_lng = bounds.max_lng.max(point.lng);
        }

        let (min_lat, max_lat) = pad_span(bounds.min_lat, bounds.max_lat);
        let (min_lng, max_lng) = pad_span(bounds.min_lng, bounds.max_lng);
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lng_span(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// North-up equirectangular projection into a `width` x `height`
    /// viewport, origin at the top-left corner.
    pub fn project(&self, point: GeoPoint, width: f64, height: f64) -> (f64, f64) {
        let x = (point.lng - self.min_lng) / self.lng_span() * width;
        let y = (self.max_lat - point.lat) / self.lat_span() * height;
        (x, y)
    }
}

fn pad_span(min: f64, max: f64) -> (f64, f64) {
    let center = (min + max) / 2.0;
    let half = ((max - min).max(MIN_SPAN_DEG)) / 2.0;
    let pad = half * 2.0 * PAD_RATIO;
    (center - half - pad, center + half + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::patrol_routes;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_fit_uses_default_viewport() {
        assert_eq!(MapBounds::fit(&[]), DEFAULT_BOUNDS);
    }

    #[test]
    fn test_single_point_centers_in_viewport() {
        let bounds = MapBounds::fit(&[GeoPoint::new(30.0, 80.0)]);
        let (x, y) = bounds.project(GeoPoint::new(30.0, 80.0), 100.0, 100.0);
        assert!(close(x, 50.0));
        assert!(close(y, 50.0));
    }

    #[test]
    fn test_fitted_points_stay_inside_viewport() {
        let points: Vec<GeoPoint> = patrol_routes().iter().map(GeoPoint::from).collect();
        let bounds = MapBounds::fit(&points);

        for point in &points {
            let (x, y) = bounds.project(*point, 640.0, 420.0);
            assert!(x > 0.0 && x < 640.0);
            assert!(y > 0.0 && y < 420.0);
        }
    }

    #[test]
    fn test_north_projects_above_south() {
        let bounds = DEFAULT_BOUNDS;
        let (_, y_north) = bounds.project(GeoPoint::new(34.0, 78.0), 100.0, 100.0);
        let (_, y_south) = bounds.project(GeoPoint::new(27.0, 78.0), 100.0, 100.0);
        assert!(y_north < y_south);
    }

    #[test]
    fn test_east_projects_right_of_west() {
        let bounds = DEFAULT_BOUNDS;
        let (x_east, _) = bounds.project(GeoPoint::new(30.0, 92.0), 100.0, 100.0);
        let (x_west, _) = bounds.project(GeoPoint::new(30.0, 76.0), 100.0, 100.0);
        assert!(x_east > x_west);
    }
}
