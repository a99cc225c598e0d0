//! Built-in essay types.
//!
//! Repeatable groups are declared once per type and reused both in the
//! canonical structure (with a `body_N` namespace) and as the body template.

use crate::types::{body_template, group, repeatable, section, DocumentType, SectionTemplate};

const ARGUMENT_BODY: &[SectionTemplate] = &[
    section("topic_sentence", "Topic Sentence", "State the main point of this paragraph..."),
    section("lead_in", "Lead-in", "Introduce the evidence with context..."),
    section("quote", "Quote / Paraphrase", "Include a direct quote or paraphrased evidence..."),
    section("analysis", "Analysis", "Explain how this evidence supports your argument..."),
    section("concluding_sentence", "Concluding Sentence", "Wrap up this paragraph and transition to the next..."),
];

const ANALYTIC_BODY: &[SectionTemplate] = &[
    section("claim", "Claim", "State your analytical point..."),
    section("lead_in", "Lead-in", "Introduce the evidence with context..."),
    section("quote", "Quote / Paraphrase", "A direct quote or specific reference from the text..."),
    section("analysis", "Analysis", "Explain how this evidence supports your claim..."),
    section("concluding_sentence", "Concluding Sentence", "Wrap up and transition..."),
];

const RESEARCH_BODY: &[SectionTemplate] = &[
    section("topic_sentence", "Topic Sentence", "The main idea of this section..."),
    section("lead_in", "Lead-in", "Introduce the source and its relevance..."),
    section("quote", "Quote / Paraphrase / Data", "Include sourced evidence with citation..."),
    section("analysis", "Analysis", "Interpret the evidence and connect it to your thesis..."),
    section("concluding_sentence", "Concluding Sentence", "Summarize and transition..."),
];

const EXPOSITORY_BODY: &[SectionTemplate] = &[
    section("topic_sentence", "Topic Sentence", "The main idea of this paragraph..."),
    section("explanation", "Explanation", "Explain the concept clearly..."),
    section("example", "Example / Evidence", "Provide a supporting example, fact, or detail..."),
    section("analysis", "Analysis", "Why does this matter? Connect back to the thesis..."),
    section("concluding_sentence", "Concluding Sentence", "Wrap up and transition..."),
];

const NARRATIVE_BODY: &[SectionTemplate] = &[
    section("event", "Key Event", "A significant moment in your story..."),
    section("details", "Sensory Details & Dialogue", "Vivid details that bring this moment to life..."),
    section("reflection", "In-the-Moment Reflection", "What were you thinking or feeling at this point?"),
];

const DESCRIPTIVE_BODY: &[SectionTemplate] = &[
    section("focus", "Focus / Sense", "Which sense or aspect are you focusing on here?"),
    section("details", "Vivid Details", "Rich, specific descriptions that paint a picture..."),
    section("impression", "Connection to Impression", "How do these details reinforce your dominant impression?"),
];

const COMPARISON_BODY: &[SectionTemplate] = &[
    section("point", "Point of Comparison", "What aspect are you comparing?"),
    section("subject_a", "Subject A", "How does the first subject relate to this point?"),
    section("subject_b", "Subject B", "How does the second subject relate to this point?"),
    section("analysis", "Analysis", "What does this comparison reveal?"),
];

const CAUSE_BODY: &[SectionTemplate] = &[
    section("cause", "Cause", "Describe this cause..."),
    section("lead_in", "Lead-in", "Introduce evidence for this cause..."),
    section("evidence", "Evidence", "Facts or examples that demonstrate this cause..."),
    section("analysis", "Analysis", "How does this cause lead to the effect?"),
];

const REFLECTIVE_BODY: &[SectionTemplate] = &[
    section("event", "What Happened", "Describe a key moment of the experience..."),
    section("thoughts", "Thoughts & Feelings", "How did you feel? What were you thinking?"),
    section("significance", "Why It Mattered", "Why was this moment significant?"),
];

const PROCESS_BODY: &[SectionTemplate] = &[
    section("instruction", "Instruction", "What does the reader need to do in this step?"),
    section("detail", "Details & Tips", "Important details, warnings, or tips..."),
    section("transition", "Transition", "Connect to the next step..."),
];

pub static CATALOG: &[DocumentType] = &[
    DocumentType {
        id: "narrative",
        title: "Narrative Essay",
        description: "Tells a story, often from your own experience. Focuses on characters, setting, and plot, like a short story but true or realistic.",
        color: "--color-narrative",
        icon: "book-open",
        structure: &[
            group("Introduction", &[
                section("hook", "Hook", "An attention-grabbing opening that draws readers into your story..."),
                section("setting", "Setting & Context", "Establish the time, place, and circumstances of your story..."),
                section("thesis", "Thesis / Central Theme", "The main insight or lesson your narrative will convey..."),
            ]),
            repeatable("Rising Action", "body_1", NARRATIVE_BODY),
            group("Climax", &[
                section("climax", "Turning Point", "The pivotal moment, the peak of your story's tension..."),
            ]),
            group("Falling Action & Resolution", &[
                section("resolution", "Resolution", "How the conflict was resolved or what changed..."),
                section("reflection", "Reflection & Takeaway", "What you learned or how this experience shaped you..."),
            ]),
        ],
        body_template: body_template("Rising Action", NARRATIVE_BODY),
    },
    DocumentType {
        id: "descriptive",
        title: "Descriptive Essay",
        description: "Paints a picture of a person, place, object, or event. Uses sensory details (sight, sound, smell, touch, taste).",
        color: "--color-descriptive",
        icon: "palette",
        structure: &[
            group("Introduction", &[
                section("hook", "Hook", "A vivid opening that immerses the reader..."),
                section("subject_intro", "Subject Introduction", "Introduce what you are describing and why it matters..."),
                section("thesis", "Dominant Impression", "The overall feeling or main impression you want to leave..."),
            ]),
            repeatable("Sensory Paragraph", "body_1", DESCRIPTIVE_BODY),
            group("Conclusion", &[
                section("final_impression", "Final Impression", "Reinforce the dominant impression and leave the reader with a lasting image..."),
            ]),
        ],
        body_template: body_template("Sensory Paragraph", DESCRIPTIVE_BODY),
    },
    DocumentType {
        id: "expository",
        title: "Expository Essay",
        description: "Explains or informs about a topic in a clear, logical way. Often includes facts, definitions, and examples. Common in subjects like science and history.",
        color: "--color-expository",
        icon: "graduation-cap",
        structure: &[
            group("Introduction", &[
                section("hook", "Hook", "An interesting fact, question, or statement to engage the reader..."),
                section("background", "Background Information", "Context the reader needs to understand the topic..."),
                section("thesis", "Thesis Statement", "A clear statement of what you will explain..."),
            ]),
            repeatable("Body Paragraph 1", "body_1", EXPOSITORY_BODY),
            repeatable("Body Paragraph 2", "body_2", EXPOSITORY_BODY),
            group("Conclusion", &[
                section("summary", "Summary of Key Points", "Restate the main points covered..."),
                section("closing", "Closing Thought", "A final thought that ties everything together..."),
            ]),
        ],
        body_template: body_template("Body Paragraph", EXPOSITORY_BODY),
    },
    DocumentType {
        id: "argumentative",
        title: "Argumentative Essay",
        description: "Tries to convince the reader of a point of view. Uses reasons, evidence, and sometimes addresses counterarguments.",
        color: "--color-argumentative",
        icon: "sword",
        structure: &[
            group("Introduction", &[
                section("hook", "Hook", "A compelling opening that grabs attention..."),
                section("intro_topic", "Introduction to Topic", "Provide background context on the issue..."),
                section("thesis", "Thesis Statement", "Your clear position on the argument..."),
            ]),
            repeatable("Body Paragraph 1", "body_1", ARGUMENT_BODY),
            repeatable("Body Paragraph 2", "body_2", ARGUMENT_BODY),
            group("Counterargument", &[
                section("counter", "Counterargument", "Acknowledge the opposing viewpoint..."),
                section("rebuttal_lead_in", "Lead-in to Rebuttal", "Transition into your response to the counterargument..."),
                section("rebuttal_evidence", "Rebuttal Evidence", "Evidence that weakens the counterargument..."),
                section("rebuttal_analysis", "Rebuttal Analysis", "Explain why your argument is still stronger..."),
            ]),
            group("Conclusion", &[
                section("restate_thesis", "Restate Thesis", "Reinforce your position in light of the evidence..."),
                section("call_to_action", "Call to Action", "What should the reader think or do after reading?"),
            ]),
        ],
        body_template: body_template("Body Paragraph", ARGUMENT_BODY),
    },
    DocumentType {
        id: "compare_contrast",
        title: "Compare-and-Contrast Essay",
        description: "Shows similarities and differences between two or more things (books, ideas, historical events, etc.).",
        color: "--color-compare-contrast",
        icon: "arrow-left-right",
        structure: &[
            group("Introduction", &[
                section("hook", "Hook", "An engaging opening about the subjects being compared..."),
                section("subjects_intro", "Introduce Both Subjects", "Briefly introduce the two subjects and why comparing them is worthwhile..."),
                section("thesis", "Thesis Statement", "What is the main point of this comparison?"),
            ]),
            repeatable("Point of Comparison 1", "body_1", COMPARISON_BODY),
            repeatable("Point of Comparison 2", "body_2", COMPARISON_BODY),
            group("Conclusion", &[
                section("synthesis", "Synthesis", "What do these comparisons reveal? Which is better, or what do we learn?"),
            ]),
        ],
        body_template: body_template("Point of Comparison", COMPARISON_BODY),
    },
    DocumentType {
        id: "cause_effect",
        title: "Cause-and-Effect Essay",
        description: "Explains why something happened (cause) and what happened as a result (effect).",
        color: "--color-cause-effect",
        icon: "git-branch",
        structure: &[
            group("Introduction", &[
                section("hook", "Hook", "A striking fact or question about the topic..."),
                section("background", "Background", "Context needed to understand the cause-effect relationship..."),
                section("thesis", "Thesis Statement", "State the cause-effect relationship you will explore..."),
            ]),
            repeatable("Cause 1", "body_1", CAUSE_BODY),
            group("Effects", &[
                section("effect_immediate", "Immediate Effect", "What happened right away as a result..."),
                section("effect_longterm", "Long-term Effect", "Lasting consequences or outcomes..."),
            ]),
            group("Conclusion", &[
                section("summary", "Summary & Significance", "Why does this cause-effect relationship matter?"),
            ]),
        ],
        body_template: body_template("Cause", CAUSE_BODY),
    },
    DocumentType {
        id: "literary_analysis",
        title: "Literary Analysis Essay",
        description: "Analyzes a novel, poem, or play. Discusses themes, characters, symbolism, or writing style using evidence from the text.",
        color: "--color-literary-analysis",
        icon: "book-marked",
        structure: &[
            group("Introduction", &[
                section("hook", "Hook", "An intriguing observation about the text..."),
                section("work_intro", "Introduce the Work", "Title, author, and brief context about the literary work..."),
                section("thesis", "Thesis Statement", "Your analytical argument about the text..."),
            ]),
            repeatable("Analysis Paragraph 1", "body_1", ANALYTIC_BODY),
            repeatable("Analysis Paragraph 2", "body_2", ANALYTIC_BODY),
            group("Conclusion", &[
                section("synthesis", "Synthesis & Broader Significance", "How does your analysis deepen understanding of the work?"),
            ]),
        ],
        body_template: body_template("Analysis Paragraph", ANALYTIC_BODY),
    },
    DocumentType {
        id: "research",
        title: "Research Essay",
        description: "Investigates a topic using outside sources. Requires citations and a bibliography.",
        color: "--color-research",
        icon: "search",
        structure: &[
            group("Introduction", &[
                section("hook", "Hook", "An engaging fact or question about your research topic..."),
                section("background", "Background & Context", "What the reader needs to know about this topic..."),
                section("thesis", "Thesis Statement", "Your research question or central argument..."),
            ]),
            repeatable("Body Section 1", "body_1", RESEARCH_BODY),
            repeatable("Body Section 2", "body_2", RESEARCH_BODY),
            group("Conclusion", &[
                section("findings", "Summary of Findings", "Summarize your key research findings..."),
                section("implications", "Implications & Future Research", "What are the broader implications? What remains to be explored?"),
            ]),
        ],
        body_template: body_template("Body Section", RESEARCH_BODY),
    },
    DocumentType {
        id: "reflective",
        title: "Reflective Essay",
        description: "Looks back on an experience and explains what you learned from it.",
        color: "--color-reflective",
        icon: "lightbulb",
        structure: &[
            group("Introduction", &[
                section("hook", "Hook", "Draw the reader into your reflective experience..."),
                section("experience_intro", "Introduction to the Experience", "What happened? Set the scene briefly..."),
                section("thesis", "Thesis / Main Insight", "What is the key lesson or realization?"),
            ]),
            repeatable("Description of Experience", "body_1", REFLECTIVE_BODY),
            group("Reflection & Analysis", &[
                section("why_significant", "Why Was This Significant?", "Why does this experience stand out to you?"),
                section("what_learned", "What You Learned", "How did this experience change your perspective or behavior?"),
            ]),
            group("Conclusion", &[
                section("looking_forward", "Looking Forward", "How will you apply what you learned in the future?"),
            ]),
        ],
        body_template: body_template("Experience Moment", REFLECTIVE_BODY),
    },
    DocumentType {
        id: "process",
        title: "Process Essay (How-to)",
        description: "Explains how to do something step by step.",
        color: "--color-process",
        icon: "list-ordered",
        structure: &[
            group("Introduction", &[
                section("hook", "Hook", "Why is this process worth learning?"),
                section("overview", "Process Overview", "Briefly describe what the reader will learn to do..."),
                section("materials", "Materials / Prerequisites", "What does the reader need before starting?"),
            ]),
            repeatable("Step 1", "body_1", PROCESS_BODY),
            repeatable("Step 2", "body_2", PROCESS_BODY),
            group("Conclusion", &[
                section("expected_result", "Expected Result", "What the reader should have accomplished..."),
                section("troubleshooting", "Troubleshooting & Final Tips", "Common issues and how to fix them..."),
            ]),
        ],
        body_template: body_template("Step", PROCESS_BODY),
    },
];
