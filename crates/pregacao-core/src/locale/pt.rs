use super::{ExportHeadings, LocaleBundle};

pub(super) static BUNDLE: LocaleBundle = LocaleBundle {
    introduction: "O livro de {{ book }} nos traz ensinamentos profundos sobre a natureza de Deus e \
        nossa relação com Ele. {% if chapter %}No capítulo {{ chapter }}, e{% else %}E{% endif %}ncontramos \
        uma passagem que nos convida à reflexão sobre {% if theme %}{{ theme }}{% else %}nossa jornada \
        espiritual{% endif %}. Este texto bíblico, escrito em um contexto histórico específico, \
        continua relevante para nossas vidas hoje, oferecendo sabedoria eterna para os desafios \
        contemporâneos.",
    key_verse_text: "\"Porque eu sei os planos que tenho para vocês\", declara o Senhor, \"planos de \
        fazê-los prosperar e não de causar dano, planos de dar a vocês esperança e um futuro.\"",
    title: "{% if theme %}{{ theme }}{% else %}A Fidelidade de Deus{% endif %} em {{ book }}",
    points: [
        "Primeiro ponto: A natureza revelada de Deus em {{ book }} nos mostra Sua fidelidade \
            constante através da história.",
        "Segundo ponto: As promessas bíblicas são atemporais e se aplicam às nossas circunstâncias \
            atuais, oferecendo direção e conforto.",
        "Terceiro ponto: Nossa resposta deve ser de fé ativa, confiando no caráter imutável de Deus \
            mesmo em meio às incertezas.",
    ],
    applications: [
        "Comece cada dia lembrando-se das promessas de Deus e medite nelas durante momentos de \
            desafio.",
        "Mantenha um diário de oração, registrando como Deus tem sido fiel em sua vida pessoal.",
        "Compartilhe testemunhos de fidelidade divina com outros membros da comunidade cristã.",
        "Pratique a gratidão diária, reconhecendo as bênçãos pequenas e grandes que recebemos.",
    ],
    conclusion: "Concluindo, o texto de {{ book }} nos lembra que, independentemente das \
        circunstâncias que enfrentamos, Deus permanece fiel aos Seus propósitos. {% if theme %}Através \
        do tema de {{ theme | lower }}, s{% else %}S{% endif %}omos chamados a viver com esperança e \
        confiança, sabendo que nossa vida está nas mãos dAquele que é eternamente confiável. Que \
        possamos sair daqui hoje com corações renovados e fé fortalecida, prontos para enfrentar cada \
        desafio com a certeza de que não estamos sozinhos.",
    memorable_points: [
        "Deus tem planos específicos para cada um de nós",
        "A fidelidade divina não depende das nossas circunstâncias",
        "Nossa esperança está fundamentada no caráter imutável de Deus",
    ],
    illustrations: [
        "Como um mestre construtor que não abandona sua obra até vê-la completa, Deus não abandona \
            o trabalho que começou em nós.",
        "Assim como uma bússola sempre aponta para o norte magnético, a Palavra de Deus sempre nos \
            direciona para Sua vontade perfeita.",
        "Um pai amoroso pode permitir que seu filho enfrente desafios para crescer, mas nunca o \
            abandona no processo - assim é o amor de Deus por nós.",
    ],

    system_instruction: "Você é um assistente especializado em criar pregações bíblicas \
        estruturadas, respeitosas e aplicáveis à vida prática. Use linguagem clara e acessível. \
        Responda com um único objeto JSON e nada mais, usando exatamente estas chaves:",
    user_prompt: "Crie uma pregação estruturada baseada em:\n\
        - Livro: {{ book }}\n\
        - Capítulo: {{ chapter }}\n\
        {% if verses %}- Versículos: {{ verses }}\n{% endif %}\
        {% if theme %}- Tema central: {{ theme }}\n{% endif %}\
        \n\
        A pregação deve ter:\n\
        1. Introdução contextualizando o livro/capítulo\n\
        2. Versículo-chave com referência\n\
        3. Mensagem principal com 3 pontos\n\
        4. Aplicações práticas (4 itens)\n\
        5. Conclusão impactante\n\
        6. 3 pontos para memorização\n\
        7. 3 ilustrações/analogias\n\
        \n\
        Responda em português brasileiro, com linguagem acessível mas respeitosa.",

    headings: ExportHeadings {
        sermon: "PREGAÇÃO",
        based_on: "Baseado em",
        theme: "Tema",
        introduction: "INTRODUÇÃO",
        key_verse: "VERSÍCULO-CHAVE",
        development: "DESENVOLVIMENTO",
        applications: "APLICAÇÕES PRÁTICAS",
        conclusion: "CONCLUSÃO",
        memorable_points: "PONTOS MEMORÁVEIS",
        illustrations: "ILUSTRAÇÕES",
    },

    missing_fields: "Por favor, selecione o livro e o capítulo.",
    generation_failed: "Por favor, tente novamente em alguns instantes.",

    old_testament: "Antigo Testamento",
    new_testament: "Novo Testamento",
    generating: "Gerando pregação...",
    unknown_book: "Livro desconhecido: {{ book }}",
    chapter_limit: "{{ book }} tem {{ chapters }} capítulos",
};
