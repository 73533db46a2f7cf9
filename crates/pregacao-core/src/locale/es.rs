use super::{ExportHeadings, LocaleBundle};

pub(super) static BUNDLE: LocaleBundle = LocaleBundle {
    introduction: "El libro de {{ book }} nos trae enseñanzas profundas sobre la naturaleza de Dios \
        y nuestra relación con Él. {% if chapter %}En el capítulo {{ chapter }}, e{% else %}E{% endif %}ncontramos \
        un pasaje que nos invita a la reflexión sobre {% if theme %}{{ theme }}{% else %}nuestro camino \
        espiritual{% endif %}. Este texto bíblico, escrito en un contexto histórico específico, \
        continúa siendo relevante para nuestras vidas hoy, ofreciendo sabiduría eterna para los \
        desafíos contemporáneos.",
    key_verse_text: "\"Porque yo sé los planes que tengo para ustedes\", declara el Señor, \"planes \
        de hacerlos prosperar y no de causar daño, planes de darles esperanza y un futuro.\"",
    title: "{% if theme %}{{ theme }}{% else %}La Fidelidad de Dios{% endif %} en {{ book }}",
    points: [
        "Primer punto: La naturaleza revelada de Dios en {{ book }} nos muestra Su fidelidad \
            constante a través de la historia.",
        "Segundo punto: Las promesas bíblicas son atemporales y se aplican a nuestras \
            circunstancias actuales, ofreciendo dirección y consuelo.",
        "Tercer punto: Nuestra respuesta debe ser de fe activa, confiando en el carácter inmutable \
            de Dios aun en medio de las incertidumbres.",
    ],
    applications: [
        "Comienza cada día recordando las promesas de Dios y medita en ellas durante momentos de \
            desafío.",
        "Mantén un diario de oración, registrando cómo Dios ha sido fiel en tu vida personal.",
        "Comparte testimonios de fidelidad divina con otros miembros de la comunidad cristiana.",
        "Practica la gratitud diaria, reconociendo las bendiciones pequeñas y grandes que recibimos.",
    ],
    conclusion: "Concluyendo, el texto de {{ book }} nos recuerda que, independientemente de las \
        circunstancias que enfrentamos, Dios permanece fiel a Sus propósitos. {% if theme %}A través \
        del tema de {{ theme | lower }}, s{% else %}S{% endif %}omos llamados a vivir con esperanza y \
        confianza, sabiendo que nuestra vida está en las manos de Aquel que es eternamente confiable. \
        Que podamos salir de aquí hoy con corazones renovados y fe fortalecida, listos para enfrentar \
        cada desafío con la certeza de que no estamos solos.",
    memorable_points: [
        "Dios tiene planes específicos para cada uno de nosotros",
        "La fidelidad divina no depende de nuestras circunstancias",
        "Nuestra esperanza está fundamentada en el carácter inmutable de Dios",
    ],
    illustrations: [
        "Como un maestro constructor que no abandona su obra hasta verla completa, Dios no abandona \
            el trabajo que comenzó en nosotros.",
        "Así como una brújula siempre apunta hacia el norte magnético, la Palabra de Dios siempre \
            nos dirige hacia Su voluntad perfecta.",
        "Un padre amoroso puede permitir que su hijo enfrente desafíos para crecer, pero nunca lo \
            abandona en el proceso - así es el amor de Dios por nosotros.",
    ],

    system_instruction: "Eres un asistente especializado en crear sermones bíblicos estructurados, \
        respetuosos y aplicables a la vida práctica. Usa lenguaje claro y accesible. Responde con un \
        único objeto JSON y nada más, usando exactamente estas claves:",
    user_prompt: "Crea un sermón estructurado basado en:\n\
        - Libro: {{ book }}\n\
        - Capítulo: {{ chapter }}\n\
        {% if verses %}- Versículos: {{ verses }}\n{% endif %}\
        {% if theme %}- Tema central: {{ theme }}\n{% endif %}\
        \n\
        El sermón debe tener:\n\
        1. Introducción contextualizando el libro/capítulo\n\
        2. Versículo clave con referencia\n\
        3. Mensaje principal con 3 puntos\n\
        4. Aplicaciones prácticas (4 elementos)\n\
        5. Conclusión impactante\n\
        6. 3 puntos para memorización\n\
        7. 3 ilustraciones/analogías\n\
        \n\
        Responde en español, con lenguaje accesible pero respetuoso.",

    headings: ExportHeadings {
        sermon: "SERMÓN",
        based_on: "Basado en",
        theme: "Tema",
        introduction: "INTRODUCCIÓN",
        key_verse: "VERSÍCULO CLAVE",
        development: "DESARROLLO",
        applications: "APLICACIONES PRÁCTICAS",
        conclusion: "CONCLUSIÓN",
        memorable_points: "PUNTOS MEMORABLES",
        illustrations: "ILUSTRACIONES",
    },

    missing_fields: "Por favor, selecciona el libro y capítulo.",
    generation_failed: "Por favor, inténtalo de nuevo en unos momentos.",

    old_testament: "Antiguo Testamento",
    new_testament: "Nuevo Testamento",
    generating: "Generando sermón...",
    unknown_book: "Libro desconocido: {{ book }}",
    chapter_limit: "{{ book }} tiene {{ chapters }} capítulos",
};
