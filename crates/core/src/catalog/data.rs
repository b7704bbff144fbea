//! Built-in vocabulary database for middle-school students: five leveled word
//! lists plus the etymology journeys and synonym battles used by the games.

use crate::model::{LevelDefinition, LevelId, VocabularyWord};

use super::{EtymologyJourney, SynonymBattle};

fn entry(
    word: &str,
    definition: &str,
    example: &str,
    synonyms: [&str; 3],
    difficulty: u8,
) -> VocabularyWord {
    VocabularyWord::new(
        word,
        definition,
        example,
        synonyms.iter().map(ToString::to_string).collect(),
        difficulty,
    )
    .expect("built-in word entry should be valid")
}

fn level(id: u8, name: &str, xp_required: u32, words: Vec<VocabularyWord>) -> LevelDefinition {
    LevelDefinition::new(LevelId::new(id), name, xp_required, words)
        .expect("built-in level should be valid")
}

fn strings(items: [&str; 5]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn triple(items: [&str; 3]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

pub(super) fn levels() -> Vec<LevelDefinition> {
    vec![
        level(1, "Foundation", 0, foundation_words()),
        level(2, "Developing", 200, developing_words()),
        level(3, "Proficient", 500, proficient_words()),
        level(4, "Advanced", 1000, advanced_words()),
        level(5, "Expert", 2000, expert_words()),
    ]
}

fn foundation_words() -> Vec<VocabularyWord> {
    vec![
        entry("analyze", "to examine in detail", "Let's analyze the poem's meaning.", ["examine", "study", "investigate"], 1),
        entry("compare", "to examine similarities and differences", "Compare these two stories.", ["contrast", "evaluate", "examine"], 1),
        entry("describe", "to give details about something", "Describe your favorite character.", ["explain", "detail", "portray"], 1),
        entry("explain", "to make something clear", "Can you explain this math problem?", ["clarify", "describe", "illustrate"], 1),
        entry("identify", "to recognize or name something", "Identify the main character.", ["recognize", "name", "point out"], 1),
        entry("predict", "to say what will happen", "Predict the story's ending.", ["forecast", "anticipate", "guess"], 1),
        entry("sequence", "the order of events", "Put the events in sequence.", ["order", "series", "arrangement"], 1),
        entry("summarize", "to give the main points", "Summarize the chapter.", ["recap", "review", "condense"], 1),
        entry("evidence", "proof or support for an idea", "Find evidence in the text.", ["proof", "support", "facts"], 1),
        entry("conclude", "to decide based on evidence", "What can you conclude?", ["decide", "determine", "infer"], 1),
        entry("achieve", "to successfully complete something", "She worked hard to achieve her goal.", ["accomplish", "reach", "attain"], 1),
        entry("benefit", "something that helps or improves", "Exercise has many benefits.", ["advantage", "help", "gain"], 1),
        entry("challenge", "something difficult to do", "The puzzle was a fun challenge.", ["difficulty", "test", "obstacle"], 1),
        entry("develop", "to grow or improve gradually", "Plants develop from seeds.", ["grow", "evolve", "progress"], 1),
        entry("establish", "to set up or create", "They established new rules.", ["create", "found", "set up"], 1),
        entry("feature", "an important part or characteristic", "The main feature of birds is flight.", ["characteristic", "trait", "quality"], 1),
        entry("generate", "to create or produce", "Wind can generate electricity.", ["create", "produce", "make"], 1),
        entry("individual", "a single person or thing", "Each individual has unique talents.", ["person", "single", "separate"], 1),
        entry("maintain", "to keep something in good condition", "We must maintain our equipment.", ["keep", "preserve", "sustain"], 1),
        entry("occur", "to happen or take place", "Storms occur in spring.", ["happen", "take place", "appear"], 1),
    ]
}

fn developing_words() -> Vec<VocabularyWord> {
    vec![
        entry("synthesize", "to combine ideas into a whole", "Scientists synthesize data from experiments.", ["combine", "merge", "integrate"], 2),
        entry("evaluate", "to judge the value of something", "Evaluate the effectiveness of the plan.", ["assess", "judge", "appraise"], 2),
        entry("interpret", "to explain the meaning of something", "How do you interpret this poem?", ["explain", "understand", "decode"], 2),
        entry("perspective", "a way of looking at something", "Consider different perspectives on the issue.", ["viewpoint", "opinion", "angle"], 2),
        entry("significant", "important or meaningful", "This discovery is significant.", ["important", "meaningful", "notable"], 2),
        entry("comprehensive", "complete and including everything", "We need a comprehensive plan.", ["complete", "thorough", "extensive"], 2),
        entry("demonstrate", "to show clearly", "Demonstrate how to solve this.", ["show", "prove", "illustrate"], 2),
        entry("methodology", "a system of methods used", "Our research methodology was careful.", ["approach", "system", "method"], 2),
        entry("legitimate", "legal, valid, or acceptable", "That's a legitimate concern.", ["valid", "acceptable", "proper"], 2),
        entry("accommodate", "to provide space or adapt for", "The hotel can accommodate 200 guests.", ["house", "adapt", "adjust"], 2),
        entry("alternative", "another choice or option", "We need an alternative solution.", ["option", "choice", "substitute"], 2),
        entry("concept", "an idea or principle", "The concept of gravity is important.", ["idea", "notion", "principle"], 2),
        entry("contribute", "to give or add to something", "Everyone should contribute to the project.", ["add", "give", "provide"], 2),
        entry("distinguish", "to recognize differences", "Can you distinguish between these sounds?", ["differentiate", "separate", "tell apart"], 2),
        entry("emphasize", "to give special importance to", "The teacher emphasized safety.", ["stress", "highlight", "underscore"], 2),
        entry("furthermore", "in addition to what was said", "The plan is expensive; furthermore, it's risky.", ["moreover", "additionally", "also"], 2),
        entry("guarantee", "to promise something will happen", "I guarantee you'll enjoy this book.", ["promise", "assure", "ensure"], 2),
        entry("hypothesis", "an educated guess to be tested", "Our hypothesis proved correct.", ["theory", "guess", "assumption"], 2),
        entry("inevitable", "certain to happen", "Change is inevitable.", ["unavoidable", "certain", "sure"], 2),
        entry("justify", "to show or prove something is right", "Can you justify your decision?", ["explain", "defend", "support"], 2),
    ]
}

fn proficient_words() -> Vec<VocabularyWord> {
    vec![
        entry("substantiate", "to provide evidence for a claim", "Please substantiate your argument with facts.", ["support", "prove", "verify"], 3),
        entry("demographic", "relating to population characteristics", "The demographic data shows age patterns.", ["population", "statistical", "census"], 3),
        entry("infrastructure", "basic systems and services", "Good infrastructure supports economic growth.", ["framework", "foundation", "systems"], 3),
        entry("implications", "possible results or consequences", "What are the implications of this decision?", ["consequences", "results", "effects"], 3),
        entry("paradigm", "a typical example or model", "This represents a new paradigm in science.", ["model", "pattern", "framework"], 3),
        entry("phenomenon", "an observable event or fact", "Lightning is a natural phenomenon.", ["occurrence", "event", "happening"], 3),
        entry("coherent", "logical and well-organized", "Please write a coherent explanation.", ["logical", "clear", "organized"], 3),
        entry("arbitrary", "based on random choice", "The decision seemed arbitrary.", ["random", "unreasonable", "capricious"], 3),
        entry("correlation", "a connection between two things", "There's a correlation between study time and grades.", ["connection", "relationship", "link"], 3),
        entry("ambiguous", "having more than one meaning", "The instructions were ambiguous.", ["unclear", "vague", "confusing"], 3),
        entry("analogy", "a comparison to explain something", "Use an analogy to explain this concept.", ["comparison", "parallel", "similarity"], 3),
        entry("bias", "unfair preference for or against something", "Try to avoid bias in your research.", ["prejudice", "favoritism", "partiality"], 3),
        entry("criterion", "a standard for judging", "What's the main criterion for selection?", ["standard", "measure", "benchmark"], 3),
        entry("deduce", "to reach a conclusion through reasoning", "What can you deduce from this evidence?", ["conclude", "infer", "reason"], 3),
        entry("elaborate", "to give more details", "Can you elaborate on your idea?", ["expand", "detail", "develop"], 3),
        entry("fluctuate", "to change irregularly", "Prices fluctuate with demand.", ["vary", "change", "shift"], 3),
        entry("generate", "to produce or create", "This machine can generate electricity.", ["produce", "create", "make"], 3),
        entry("hierarchy", "a system of ranking", "The company has a clear hierarchy.", ["ranking", "order", "structure"], 3),
        entry("innovation", "a new method or idea", "This innovation will change everything.", ["invention", "advancement", "breakthrough"], 3),
        entry("juxtapose", "to place side by side for comparison", "Let's juxtapose these two theories.", ["compare", "contrast", "place together"], 3),
    ]
}

fn advanced_words() -> Vec<VocabularyWord> {
    vec![
        entry("empirical", "based on observation and experiment", "We need empirical evidence to support this.", ["observational", "experimental", "factual"], 4),
        entry("rhetoric", "the art of persuasive speaking", "His rhetoric was very convincing.", ["persuasion", "oratory", "eloquence"], 4),
        entry("catalyst", "something that causes change", "The new policy was a catalyst for reform.", ["trigger", "stimulus", "agent"], 4),
        entry("ideology", "a system of beliefs or ideas", "Political ideology shapes many decisions.", ["beliefs", "philosophy", "doctrine"], 4),
        entry("preliminary", "coming before the main part", "These are just preliminary results.", ["initial", "introductory", "preparatory"], 4),
        entry("inherent", "existing as a natural part", "Risk is inherent in all investments.", ["natural", "built-in", "intrinsic"], 4),
        entry("subsequent", "coming after something else", "Subsequent events proved her right.", ["following", "later", "next"], 4),
        entry("predominant", "most common or strongest", "Red was the predominant color.", ["main", "primary", "dominant"], 4),
        entry("conducive", "helping to bring about", "Quiet is conducive to study.", ["helpful", "favorable", "beneficial"], 4),
        entry("comprehensive", "including everything", "We need a comprehensive review.", ["complete", "thorough", "extensive"], 4),
        entry("advocate", "to publicly support something", "She advocates for environmental protection.", ["support", "champion", "promote"], 4),
        entry("beneficial", "having a good effect", "Exercise is beneficial for health.", ["helpful", "advantageous", "useful"], 4),
        entry("constitute", "to form or make up", "These parts constitute the whole machine.", ["form", "make up", "compose"], 4),
        entry("derived", "obtained from another source", "This word is derived from Latin.", ["obtained", "taken", "extracted"], 4),
        entry("estimate", "to roughly calculate", "Estimate how long this will take.", ["calculate", "guess", "approximate"], 4),
        entry("factor", "something that contributes to a result", "Weather is an important factor.", ["element", "component", "aspect"], 4),
        entry("indicate", "to point out or show", "The signs indicate danger ahead.", ["show", "suggest", "point to"], 4),
        entry("obtain", "to get or acquire", "Where did you obtain this information?", ["get", "acquire", "gain"], 4),
        entry("perceive", "to become aware of through senses", "I perceive a change in her attitude.", ["notice", "sense", "observe"], 4),
        entry("relevant", "closely connected to the matter", "Is this information relevant?", ["applicable", "pertinent", "related"], 4),
    ]
}

fn expert_words() -> Vec<VocabularyWord> {
    vec![
        entry("epistemological", "relating to the nature of knowledge", "This raises epistemological questions.", ["philosophical", "theoretical", "conceptual"], 5),
        entry("ubiquitous", "existing everywhere at once", "Smartphones are ubiquitous today.", ["everywhere", "universal", "omnipresent"], 5),
        entry("paradigmatic", "serving as a typical example", "This is a paradigmatic case study.", ["exemplary", "typical", "model"], 5),
        entry("dialectical", "relating to logical discussion", "They engaged in dialectical reasoning.", ["logical", "analytical", "rational"], 5),
        entry("metacognitive", "thinking about thinking", "Metacognitive skills help learning.", ["self-aware", "reflective", "introspective"], 5),
        entry("autonomous", "having self-government", "The region became autonomous.", ["independent", "self-governing", "free"], 5),
        entry("contemporary", "existing at the same time", "She's a contemporary artist.", ["modern", "current", "present-day"], 5),
        entry("predominant", "having the most power", "Fear was the predominant emotion.", ["dominant", "main", "primary"], 5),
        entry("simultaneous", "happening at the same time", "There were simultaneous explosions.", ["concurrent", "synchronized", "parallel"], 5),
        entry("unprecedented", "never done before", "This is an unprecedented situation.", ["unparalleled", "unique", "novel"], 5),
        entry("accumulate", "to gather or collect over time", "Snow began to accumulate on the ground.", ["gather", "collect", "amass"], 5),
        entry("approximate", "close to the actual but not exact", "What's the approximate cost?", ["rough", "estimated", "close"], 5),
        entry("conceive", "to form an idea in the mind", "It's hard to conceive such a plan.", ["imagine", "think up", "devise"], 5),
        entry("differentiate", "to recognize differences between", "Can you differentiate these species?", ["distinguish", "separate", "tell apart"], 5),
        entry("explicit", "stated clearly and directly", "The instructions were explicit.", ["clear", "direct", "specific"], 5),
        entry("fundamental", "forming a necessary base", "Reading is a fundamental skill.", ["basic", "essential", "core"], 5),
        entry("implement", "to put a plan into action", "We'll implement the new policy tomorrow.", ["execute", "carry out", "apply"], 5),
        entry("infrastructure", "basic systems and structures", "The city's infrastructure needs repair.", ["framework", "foundation", "systems"], 5),
        entry("manipulate", "to handle or control skillfully", "She can manipulate data effectively.", ["handle", "control", "manage"], 5),
        entry("paradigm", "a typical example or pattern", "This represents a new paradigm.", ["model", "pattern", "example"], 5),
    ]
}

pub(super) fn journeys() -> Vec<EtymologyJourney> {
    vec![
        EtymologyJourney::new(
            "democracy", "demos", "people", "cracy", "rule/government", "Greek",
            strings(["democratic", "democratize", "democrat", "democratization", "democratically"]),
            "a system of government by the whole population",
        ),
        EtymologyJourney::new(
            "biography", "bio", "life", "graphy", "writing/study", "Greek",
            strings(["biological", "biographer", "autobiographical", "biodegradable", "biology"]),
            "an account of someone's life written by someone else",
        ),
        EtymologyJourney::new(
            "telephone", "tele", "distant", "phone", "sound/voice", "Greek",
            strings(["telephonic", "teleconference", "telephoto", "telepathy", "television"]),
            "a device for transmitting sound over long distances",
        ),
        EtymologyJourney::new(
            "microscope", "micro", "small", "scope", "to look at", "Greek",
            strings(["microscopic", "microorganism", "microscopy", "microbiology", "microphone"]),
            "an instrument for viewing very small objects",
        ),
        EtymologyJourney::new(
            "geography", "geo", "earth", "graphy", "writing/study", "Greek",
            strings(["geological", "geographer", "geometric", "geology", "geothermal"]),
            "the study of Earth's surface and features",
        ),
        EtymologyJourney::new(
            "transport", "trans", "across", "port", "carry", "Latin",
            strings(["transportation", "portable", "export", "import", "support"]),
            "to carry from one place to another",
        ),
        EtymologyJourney::new(
            "psychology", "psycho", "mind/soul", "logy", "study of", "Greek",
            strings(["psychological", "psychologist", "psychiatry", "psychotherapy", "psychotic"]),
            "the study of the human mind and behavior",
        ),
        EtymologyJourney::new(
            "astronomy", "astro", "star", "nomy", "arrangement/law", "Greek",
            strings(["astronomer", "astronaut", "astronomical", "astrophysics", "astrology"]),
            "the study of celestial objects and space",
        ),
    ]
}

pub(super) fn battles() -> Vec<SynonymBattle> {
    vec![
        SynonymBattle::new(
            "analyze", "to examine methodically and in detail",
            triple(["examine", "study", "investigate"]),
            triple(["ignore", "assume", "confuse"]),
        ),
        SynonymBattle::new(
            "synthesize", "to combine different ideas or elements",
            triple(["combine", "merge", "integrate"]),
            triple(["separate", "destroy", "fragment"]),
        ),
        SynonymBattle::new(
            "substantial", "of considerable importance or worth",
            triple(["significant", "considerable", "important"]),
            triple(["trivial", "minor", "negligible"]),
        ),
        SynonymBattle::new(
            "comprehensive", "complete and including everything",
            triple(["complete", "thorough", "extensive"]),
            triple(["partial", "incomplete", "limited"]),
        ),
        SynonymBattle::new(
            "evaluate", "to judge or determine the value of",
            triple(["assess", "judge", "appraise"]),
            triple(["ignore", "accept", "dismiss"]),
        ),
        SynonymBattle::new(
            "demonstrate", "to clearly show the existence of something",
            triple(["show", "prove", "illustrate"]),
            triple(["hide", "conceal", "confuse"]),
        ),
        SynonymBattle::new(
            "distinguish", "to recognize differences between things",
            triple(["differentiate", "separate", "discriminate"]),
            triple(["combine", "mix", "confuse"]),
        ),
        SynonymBattle::new(
            "emphasize", "to give special importance to something",
            triple(["stress", "highlight", "underscore"]),
            triple(["downplay", "ignore", "minimize"]),
        ),
    ]
}
