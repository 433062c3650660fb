#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str, // in-page anchor
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub href: &'static str,
    pub aria_label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueIcon {
    Users,
    Heart,
    TrendingUp,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClubValue {
    pub icon: ValueIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduleDay {
    pub day: &'static str,
    pub time: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rule {
    pub title: &'static str,
    pub content: &'static [&'static str],
}
