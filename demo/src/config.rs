use movement_msg::message::Position;

/// Target positions sent by the demo, one test case each.
pub const TEST_CASES: [Position; 3] = [
    Position::new(1.5, 2.7, 3.9),
    Position::new(-10.123, 25.456, 0.0),
    Position::new(100.0, -50.0, 75.25),
];

/// Width of the separator printed between test cases.
pub const BANNER_WIDTH: usize = 50;
