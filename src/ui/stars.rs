/// Star rating
/// Draws one filled five-point star per rating point
use iced::widget::canvas::{self, Path};
use iced::{Color, Point, Rectangle, Size};

use crate::Message;

/// Edge length of the square cell each star is drawn in
pub const STAR_CELL: f32 = 20.0;

/// Filled stars for a breed rating
#[derive(Debug, Clone, Copy)]
pub struct StarRating {
    /// Number of filled stars
    pub count: u8,
    pub color: Color,
}

impl StarRating {
    /// Size the canvas needs to fit every star
    pub fn size(&self) -> Size {
        Size::new(STAR_CELL * f32::from(self.count), STAR_CELL)
    }
}

/// Center of each star cell, left to right
pub fn star_centers(count: u8, cell: f32) -> Vec<Point> {
    (0..count)
        .map(|i| Point::new(cell * (f32::from(i) + 0.5), cell / 2.0))
        .collect()
}

/// Outline of a five-point star: ten vertices alternating outer/inner radius,
/// first vertex pointing straight up
pub fn star_outline(center: Point, outer: f32, inner: f32) -> [Point; 10] {
    let mut points = [Point::ORIGIN; 10];

    for (i, point) in points.iter_mut().enumerate() {
        let radius = if i % 2 == 0 { outer } else { inner };
        let angle = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::PI / 5.0;
        *point = Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin());
    }

    points
}

impl canvas::Program<Message> for StarRating {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        if self.count == 0 {
            return vec![frame.into_geometry()];
        }

        let cell = (bounds.width / f32::from(self.count)).min(bounds.height);
        let outer = cell * 0.45;
        let inner = outer * 0.4;

        for center in star_centers(self.count, cell) {
            let outline = star_outline(center, outer, inner);
            let star = Path::new(|builder| {
                builder.move_to(outline[0]);
                for &point in &outline[1..] {
                    builder.line_to(point);
                }
                builder.close();
            });

            frame.fill(&star, self.color);
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_center_per_star() {
        assert!(star_centers(0, STAR_CELL).is_empty());

        let centers = star_centers(4, STAR_CELL);
        assert_eq!(centers.len(), 4);
        assert_eq!(centers[0], Point::new(10.0, 10.0));
        assert_eq!(centers[3], Point::new(70.0, 10.0));
    }

    #[test]
    fn test_size_fits_all_stars() {
        let rating = StarRating { count: 4, color: Color::BLACK };
        assert_eq!(rating.size(), Size::new(80.0, 20.0));
    }

    #[test]
    fn test_outline_points_up() {
        let outline = star_outline(Point::new(10.0, 10.0), 9.0, 3.6);

        assert!((outline[0].x - 10.0).abs() < 1e-4);
        assert!((outline[0].y - 1.0).abs() < 1e-4);

        for (i, point) in outline.iter().enumerate() {
            let radius = ((point.x - 10.0).powi(2) + (point.y - 10.0).powi(2)).sqrt();
            let expected = if i % 2 == 0 { 9.0 } else { 3.6 };
            assert!((radius - expected).abs() < 1e-3);
        }
    }
}
