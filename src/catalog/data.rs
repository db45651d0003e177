//! Built-in reference tables for the solar system and the probe fleet.
//!
//! Distances are relative orbit units, not AU. Sizes are render radii.

use super::{BodyKind, CelestialBody, Probe, ProbeKind, ProbeStatus};

/// Sun and the eight planets, star first.
pub static BODIES: &[CelestialBody] = &[
    CelestialBody {
        id: "sun",
        name: "Sun",
        local_name: "太阳",
        kind: BodyKind::Star,
        distance: 0.0,
        size: 2.0,
        color: 0xfacc15,
        description: "太阳系中心的恒星。",
        probes: &["parker", "soho"],
    },
    CelestialBody {
        id: "mercury",
        name: "Mercury",
        local_name: "水星",
        kind: BodyKind::Planet,
        distance: 3.0,
        size: 0.5,
        color: 0x94a3b8,
        description: "离太阳最近的行星。",
        probes: &["messenger", "bepicolombo"],
    },
    CelestialBody {
        id: "venus",
        name: "Venus",
        local_name: "金星",
        kind: BodyKind::Planet,
        distance: 4.5,
        size: 0.8,
        color: 0xfdba74,
        description: "太阳系中最热的行星。",
        probes: &["akatsuki", "magellan"],
    },
    CelestialBody {
        id: "earth",
        name: "Earth",
        local_name: "地球",
        kind: BodyKind::Planet,
        distance: 6.0,
        size: 0.9,
        color: 0x3b82f6,
        description: "我们的家园。",
        probes: &["iss", "hubble"],
    },
    CelestialBody {
        id: "mars",
        name: "Mars",
        local_name: "火星",
        kind: BodyKind::Planet,
        distance: 8.0,
        size: 0.7,
        color: 0xef4444,
        description: "红色星球，人类未来的目标。",
        probes: &["perseverance", "curiosity", "tianwen1", "hope"],
    },
    CelestialBody {
        id: "jupiter",
        name: "Jupiter",
        local_name: "木星",
        kind: BodyKind::Planet,
        distance: 11.0,
        size: 1.5,
        color: 0xfb923c,
        description: "太阳系最大的气态行星。",
        probes: &["juno", "galileo", "juice"],
    },
    CelestialBody {
        id: "saturn",
        name: "Saturn",
        local_name: "土星",
        kind: BodyKind::Planet,
        distance: 14.0,
        size: 1.3,
        color: 0xeab308,
        description: "拥有壮丽环系的行星。",
        probes: &["cassini", "dragonfly"],
    },
    CelestialBody {
        id: "uranus",
        name: "Uranus",
        local_name: "天王星",
        kind: BodyKind::Planet,
        distance: 17.0,
        size: 1.1,
        color: 0x22d3ee,
        description: "冰巨星，自转轴倾斜严重。",
        probes: &["voyager2"],
    },
    CelestialBody {
        id: "neptune",
        name: "Neptune",
        local_name: "海王星",
        kind: BodyKind::Planet,
        distance: 20.0,
        size: 1.1,
        color: 0x6366f1,
        description: "离太阳最远的冰巨星。",
        probes: &["voyager2"],
    },
];

/// Probe fleet. Targets are free text and need not name a body.
pub static PROBES: &[Probe] = &[
    Probe {
        id: "voyager1",
        name: "旅行者1号",
        target: "interstellar",
        launch_date: "1977-09-05",
        status: ProbeStatus::Active,
        kind: ProbeKind::Flyby,
        description: "目前距离地球最远的人造物体。",
    },
    Probe {
        id: "perseverance",
        name: "毅力号",
        target: "mars",
        launch_date: "2020-07-30",
        status: ProbeStatus::Active,
        kind: ProbeKind::Rover,
        description: "正在火星杰泽罗陨石坑寻找生命迹象。",
    },
    Probe {
        id: "juno",
        name: "朱诺号",
        target: "jupiter",
        launch_date: "2011-08-05",
        status: ProbeStatus::Active,
        kind: ProbeKind::Orbiter,
        description: "深入研究木星的成分和重力场。",
    },
    Probe {
        id: "tianwen1",
        name: "天问一号",
        target: "mars",
        launch_date: "2020-07-23",
        status: ProbeStatus::Active,
        kind: ProbeKind::Orbiter,
        description: "中国首个火星探测器，包含祝融号火星车。",
    },
    Probe {
        id: "parker",
        name: "帕克太阳探测器",
        target: "sun",
        launch_date: "2018-08-12",
        status: ProbeStatus::Active,
        kind: ProbeKind::Orbiter,
        description: "人类历史上最接近太阳的航天器。",
    },
    Probe {
        id: "jameswebb",
        name: "詹姆斯·韦伯望远镜",
        target: "deepspace",
        launch_date: "2021-12-25",
        status: ProbeStatus::Active,
        kind: ProbeKind::Orbiter,
        description: "有史以来最强大的太空望远镜，观测早期宇宙。",
    },
    Probe {
        id: "cassini",
        name: "卡西尼号",
        target: "saturn",
        launch_date: "1997-10-15",
        status: ProbeStatus::Retired,
        kind: ProbeKind::Orbiter,
        description: "对土星及其卫星进行了13年的详尽探索。",
    },
    Probe {
        id: "newhorizons",
        name: "新视野号",
        target: "pluto",
        launch_date: "2006-01-19",
        status: ProbeStatus::Active,
        kind: ProbeKind::Flyby,
        description: "首次飞掠冥王星并探索柯伊伯带。",
    },
];
