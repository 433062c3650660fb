//! Static page copy. Everything the sections render comes from here.

use crate::types::{ClubValue, NavLink, Rule, ScheduleDay, SocialLink, ValueIcon};

pub const CLUB_NAME: &str = "TRIBE";
pub const LOCATION: &str = "Santa Barbara";

/// Anchor of the hero section, where the brand link points
pub const HOME_HREF: &str = "#inicio";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Inicio", href: "#inicio" },
    NavLink { label: "Nosotros", href: "#nosotros" },
    NavLink { label: "Horarios", href: "#horarios" },
    NavLink { label: "Reglamento", href: "#reglamento" },
];

pub const INSTAGRAM: SocialLink = SocialLink {
    href: "https://www.instagram.com/tribeclub__running/",
    aria_label: "Seguir en Instagram",
};

pub const HERO_TAGLINE: &str =
    "Comunidad de running en Santa Barbara. Corremos juntos, crecemos juntos.";
pub const RUN_DAYS: &str = "Miércoles & Viernes";

pub const ABOUT_INTRO: &str = "TRIBE nacio en Santa Barbara como un espacio donde corredores de todos los niveles pueden reunirse, entrenar y motivarse mutuamente. No importa tu ritmo ni tu experiencia, aqui todos corremos juntos.";

pub const VALUES: &[ClubValue] = &[
    ClubValue {
        icon: ValueIcon::Users,
        title: "Comunidad",
        description: "Un espacio positivo para compartir experiencias, entrenamientos, carreras y motivacion.",
    },
    ClubValue {
        icon: ValueIcon::Heart,
        title: "Apoyo",
        description: "Promovemos la participacion sin miedo a juicios. Cada miembro suma energia positiva.",
    },
    ClubValue {
        icon: ValueIcon::TrendingUp,
        title: "Crecimiento",
        description: "El running es crecimiento personal. Juntos vamos mas lejos, mas rapido, mas fuerte.",
    },
];

pub const SCHEDULE: &[ScheduleDay] = &[
    ScheduleDay {
        day: "Miercoles",
        time: "6:00 PM",
        label: "Entrenamiento",
        description: "Sesion de entrenamiento grupal para todos los niveles.",
    },
    ScheduleDay {
        day: "Viernes",
        time: "6:00 PM",
        label: "Carrera libre",
        description: "Corremos juntos a ritmo libre. Ideal para cerrar la semana.",
    },
];

pub const RULES_INTRO: &str =
    "Para mantener un ambiente sano y motivador, todos los miembros de TRIBE seguimos estas reglas.";

pub const RULES: &[Rule] = &[
    Rule {
        title: "1. Objetivo del grupo",
        content: &[
            "Crear un espacio positivo para compartir experiencias, entrenamientos, carreras, consejos y motivación relacionados con el running.",
            "Promover la participación sin miedo a juicios o críticas innecesarias.",
        ],
    },
    Rule {
        title: "2. Publicaciones",
        content: &[
            "Se permiten posts sobre entrenamientos, carreras, inscripciones, logros personales, consejos y cualquier tema vinculado al running.",
            "Cada publicación debe tener un enfoque constructivo y aportar valor a la comunidad.",
        ],
    },
    Rule {
        title: "3. Comentarios",
        content: &[
            "Apoyo y respeto primero: Los comentarios deben ser motivadores, informativos o neutrales.",
            "No se permiten comentarios pasivo-agresivos, despectivos, críticas personales sobre decisiones de otros, ni juicios sobre la capacidad económica, física o personal de los miembros.",
            "Si se permiten preguntas genuinas, felicitaciones, consejos prácticos y experiencias propias compartidas de manera respetuosa.",
        ],
    },
    Rule {
        title: "4. Diversidad de puntos de vista",
        content: &[
            "Todos tenemos opiniones distintas y está bien expresarlas, siempre que se haga con respeto y sin desmotivar a otros.",
            "Si alguien no puede participar en una carrera o actividad, se respeta su decisión sin necesidad de comentarios negativos.",
        ],
    },
    Rule {
        title: "5. Convivencia",
        content: &[
            "El grupo es un espacio de motivación, no de polémica.",
            "Evitar discusiones innecesarias que puedan generar incomodidad o inhibir la participación futura.",
            "En caso de conflicto, se recomienda resolverlo en privado y no en el grupo.",
        ],
    },
    Rule {
        title: "6. Moderación",
        content: &[
            "Los administradores podrán eliminar comentarios o publicaciones que incumplan estas normas.",
            "Reincidencias pueden llevar a la suspensión temporal o definitiva del miembro.",
        ],
    },
    Rule {
        title: "7. Espíritu del club",
        content: &[
            "Recordemos que el running es comunidad, apoyo y crecimiento personal.",
            "Cada aporte debe sumar energía positiva y motivación para que todos disfruten del grupo.",
        ],
    },
];

pub const FOOTER_TAGLINE: &str = "Running club de Santa Bárbara.";
pub const AUTHOR_NAME: &str = "LEstebanR";
pub const AUTHOR_URL: &str = "https://lesteban.dev";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_links_point_at_section_anchors() {
        let hrefs: Vec<&str> = NAV_LINKS.iter().map(|link| link.href).collect();
        assert_eq!(hrefs, ["#inicio", "#nosotros", "#horarios", "#reglamento"]);
    }

    #[test]
    fn rule_titles_are_unique_and_numbered_in_order() {
        for (i, rule) in RULES.iter().enumerate() {
            assert!(rule.title.starts_with(&format!("{}. ", i + 1)));
            assert!(!rule.content.is_empty());
        }
        let titles: HashSet<&str> = RULES.iter().map(|rule| rule.title).collect();
        assert_eq!(titles.len(), RULES.len());
    }

    #[test]
    fn schedule_covers_both_run_days() {
        let days: Vec<&str> = SCHEDULE.iter().map(|day| day.day).collect();
        assert_eq!(days, ["Miercoles", "Viernes"]);
    }
}
