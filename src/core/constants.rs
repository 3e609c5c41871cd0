/// Animation and layout tuning shared by the pure core.
///
/// Values mirror the look of the published page; change them here rather than
/// sprinkling literals through the layout code.
// Pointer spring (per axis)
pub const SPRING_STIFFNESS: f32 = 300.0;
pub const SPRING_DAMPING: f32 = 50.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_REST_DELTA: f32 = 0.001;
pub const SPRING_REST_SPEED: f32 = 0.01;
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_FRAME_SEC: f32 = 1.0 / 15.0; // clamp after tab switches

// Particle field counts
pub const NODE_COUNT: usize = 25;
pub const CONNECTION_COUNT: usize = 12;
pub const ORBITAL_COUNT: usize = 8;
pub const LABEL_COUNT: usize = 15;

// Upper bound on any `data-*` count override, as a multiple of the default
pub const OVERRIDE_COUNT_FACTOR: usize = 8;

// Random ranges: (min, max) for uniform draws
pub const POSITION_PCT: (f32, f32) = (0.0, 100.0);
pub const ORBITAL_CENTER_PCT: (f32, f32) = (10.0, 90.0);
pub const NODE_SIZE_PX: (f32, f32) = (20.0, 60.0);
pub const NODE_DELAY_SEC: (f32, f32) = (0.0, 5.0);
pub const NODE_SPEED: (f32, f32) = (0.3, 0.8);
pub const CONNECTION_DELAY_SEC: (f32, f32) = (0.0, 3.0);
pub const CONNECTION_DURATION_SEC: (f32, f32) = (2.0, 6.0);
pub const ORBITAL_RADIUS_PX: (f32, f32) = (30.0, 90.0);
pub const ORBITAL_SATELLITES: (usize, usize) = (2, 5); // inclusive
pub const ORBITAL_SPEED: (f32, f32) = (0.5, 1.5);
pub const LABEL_DELAY_SEC: (f32, f32) = (0.0, 5.0);
pub const LABEL_DURATION_SEC: (f32, f32) = (4.0, 10.0);

pub const LABEL_TEXTS: [&str; 15] = [
    "CI/CD",
    "K8s",
    "AWS",
    "Docker",
    "Terraform",
    "Jenkins",
    "Helm",
    "Istio",
    "Prometheus",
    "Grafana",
    "ELK",
    "Redis",
    "Kafka",
    "SRE",
    "DevOps",
];

// Parallax scale (px per unit of smoothed pointer), x then y
pub const NODE_PARALLAX: [f32; 2] = [40.0, 30.0];
pub const CONNECTION_PARALLAX: [f32; 2] = [25.0, 20.0];
pub const LABEL_PARALLAX: [f32; 2] = [15.0, 12.0];

// Oscillation keyframes
pub const NODE_SCALE_KEYS: [f32; 3] = [1.0, 1.2, 1.0];
pub const NODE_OPACITY_KEYS: [f32; 3] = [0.3, 0.7, 0.3];
pub const NODE_PERIOD_PER_SPEED: f32 = 2.0;
pub const ORBIT_PERIOD_PER_SPEED: f32 = 10.0;
pub const LABEL_BOB_KEYS_PX: [f32; 3] = [-10.0, 10.0, -10.0];
pub const LABEL_OPACITY_KEYS: [f32; 3] = [0.2, 0.6, 0.2];

// Viewport reveal
pub const REVEAL_MARGIN_PX: f32 = 50.0;
pub const SCROLL_OPACITY_INPUT: [f32; 4] = [0.0, 0.3, 0.7, 1.0];
pub const SCROLL_OPACITY_OUTPUT: [f32; 4] = [0.4, 1.0, 1.0, 0.4];
pub const SCROLL_SHIFT_INPUT: [f32; 2] = [0.0, 1.0];
pub const SCROLL_SHIFT_OUTPUT_PCT: [f32; 2] = [0.0, -15.0];

// Fade applied to the loading overlay and fallback panel (seconds)
pub const EMBED_FADE_SEC: f32 = 1.0;

// External references
pub const EMBED_SCENE_URL: &str =
    "https://my.spline.design/projectpromolookatmouse-ddlyf0zWizL0p3CxWVOAfFxt/";
pub const CONTACT_EMAIL: &str = "itsdebanjandas@gmail.com";
pub const PROFILE_URL: &str = "https://www.linkedin.com/in/debanjan0212/";
