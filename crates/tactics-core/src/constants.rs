// Layout and persistence constants shared by every front end.

// Backing-store key holding the JSON array of saved layouts
pub const STORAGE_KEY: &str = "footballTacticsStates";

// Kick-off spot
pub const BALL_KICKOFF: [f64; 2] = [50.0, 50.0];

// Home side, 4-3-3 attacking upwards: GK, back four, midfield three, front three
pub const HOME_FORMATION: [(&str, [f64; 2]); 11] = [
    ("h1", [50.0, 90.0]),
    ("h2", [20.0, 65.0]),
    ("h3", [40.0, 70.0]),
    ("h4", [60.0, 70.0]),
    ("h5", [80.0, 65.0]),
    ("h6", [30.0, 45.0]),
    ("h7", [50.0, 55.0]),
    ("h8", [70.0, 45.0]),
    ("h9", [10.0, 30.0]),
    ("h10", [50.0, 30.0]),
    ("h11", [90.0, 30.0]),
];

// Away side, 4-2-3-1: GK, back four, two holding, three behind the striker
pub const AWAY_FORMATION: [(&str, [f64; 2]); 11] = [
    ("a1", [50.0, 10.0]),
    ("a2", [20.0, 30.0]),
    ("a3", [40.0, 30.0]),
    ("a4", [60.0, 30.0]),
    ("a5", [80.0, 30.0]),
    ("a6", [35.0, 40.0]),
    ("a7", [65.0, 40.0]),
    ("a8", [25.0, 50.0]),
    ("a9", [50.0, 50.0]),
    ("a10", [75.0, 50.0]),
    ("a11", [50.0, 65.0]),
];

// Percentage scale of pitch coordinates
pub const PITCH_SPAN: f64 = 100.0;
