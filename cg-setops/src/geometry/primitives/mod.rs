mod chain;
mod circle;
mod line;
mod line_segment;
mod point;
mod polygon;
mod ray;
mod rectangle;
mod ring;

#[doc(inline)]
pub use chain::Chain;
#[doc(inline)]
pub use circle::Circle;
#[doc(inline)]
pub use line::Line;
#[doc(inline)]
pub use line::VerticalLine;
#[doc(inline)]
pub use line_segment::LineSegment;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use polygon::Polygon;
#[doc(inline)]
pub use ray::Ray;
#[doc(inline)]
pub use rectangle::Rectangle;
#[doc(inline)]
pub use ring::Ring;
