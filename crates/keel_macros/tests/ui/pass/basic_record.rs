//! Basic record: defaults, builder, accessors, Default impl.

keel_macros::readonly_record! {
    /// A 2D point.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Point {
        x: i32 = 0,
        y: i32 = 0,
    }
}

fn main() {
    let p = Point::builder().x(3).y(4).build();
    assert_eq!(*p.x(), 3);
    assert_eq!(*p.y(), 4);

    let origin = Point::default();
    assert_eq!(*origin.x(), 0);
    assert_eq!(*origin.y(), 0);

    let partial = Point::builder().y(7).build();
    assert_eq!(*partial.x(), 0);
    assert_eq!(*partial.y(), 7);
}
