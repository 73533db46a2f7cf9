use super::{ExportHeadings, LocaleBundle};

pub(super) static BUNDLE: LocaleBundle = LocaleBundle {
    introduction: "The book of {{ book }} brings us deep teachings about God's nature and our \
        relationship with Him. {% if chapter %}In chapter {{ chapter }}, w{% else %}W{% endif %}e find \
        a passage that invites us to reflect on {% if theme %}{{ theme }}{% else %}our spiritual \
        journey{% endif %}. This biblical text, written in a specific historical context, remains \
        relevant to our lives today, offering eternal wisdom for contemporary challenges.",
    key_verse_text: "\"For I know the plans I have for you,\" declares the Lord, \"plans to prosper \
        you and not to harm you, plans to give you hope and a future.\"",
    title: "{% if theme %}{{ theme }}{% else %}God's Faithfulness{% endif %} in {{ book }}",
    points: [
        "First point: God's revealed nature in {{ book }} shows us His constant faithfulness \
            throughout history.",
        "Second point: Biblical promises are timeless and apply to our current circumstances, \
            offering direction and comfort.",
        "Third point: Our response should be active faith, trusting in God's unchanging character \
            even amid uncertainties.",
    ],
    applications: [
        "Start each day remembering God's promises and meditate on them during challenging moments.",
        "Keep a prayer journal, recording how God has been faithful in your personal life.",
        "Share testimonies of divine faithfulness with other members of the Christian community.",
        "Practice daily gratitude, recognizing the small and great blessings we receive.",
    ],
    conclusion: "In conclusion, the text from {{ book }} reminds us that, regardless of the \
        circumstances we face, God remains faithful to His purposes. {% if theme %}Through the theme \
        of {{ theme | lower }}, we{% else %}We{% endif %} are called to live with hope and confidence, \
        knowing that our life is in the hands of the One who is eternally trustworthy. May we leave \
        here today with renewed hearts and strengthened faith, ready to face each challenge with the \
        certainty that we are not alone.",
    memorable_points: [
        "God has specific plans for each one of us",
        "Divine faithfulness doesn't depend on our circumstances",
        "Our hope is founded on God's unchanging character",
    ],
    illustrations: [
        "Like a master builder who doesn't abandon his work until he sees it complete, God doesn't \
            abandon the work He began in us.",
        "Just as a compass always points to magnetic north, God's Word always directs us to His \
            perfect will.",
        "A loving father may allow his child to face challenges to grow, but never abandons him in \
            the process - this is God's love for us.",
    ],

    system_instruction: "You are an assistant specialized in creating structured, respectful \
        biblical sermons that are applicable to practical life. Use clear and accessible language. \
        Reply with a single JSON object and nothing else, using exactly these keys:",
    user_prompt: "Create a structured sermon based on:\n\
        - Book: {{ book }}\n\
        - Chapter: {{ chapter }}\n\
        {% if verses %}- Verses: {{ verses }}\n{% endif %}\
        {% if theme %}- Central theme: {{ theme }}\n{% endif %}\
        \n\
        The sermon should have:\n\
        1. Introduction contextualizing the book/chapter\n\
        2. Key verse with reference\n\
        3. Main message with 3 points\n\
        4. Practical applications (4 items)\n\
        5. Impactful conclusion\n\
        6. 3 points for memorization\n\
        7. 3 illustrations/analogies\n\
        \n\
        Respond in English, with accessible but respectful language.",

    headings: ExportHeadings {
        sermon: "SERMON",
        based_on: "Based on",
        theme: "Theme",
        introduction: "INTRODUCTION",
        key_verse: "KEY VERSE",
        development: "DEVELOPMENT",
        applications: "PRACTICAL APPLICATIONS",
        conclusion: "CONCLUSION",
        memorable_points: "MEMORABLE POINTS",
        illustrations: "ILLUSTRATIONS",
    },

    missing_fields: "Please select the book and chapter.",
    generation_failed: "Please try again in a few moments.",

    old_testament: "Old Testament",
    new_testament: "New Testament",
    generating: "Generating sermon...",
    unknown_book: "Unknown book: {{ book }}",
    chapter_limit: "{{ book }} has {{ chapters }} chapters",
};
