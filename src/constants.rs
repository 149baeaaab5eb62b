/// Characters removed from a ranked phrase before it becomes a candidate keyword.
pub const STRIPPED_KEYWORD_CHARS: &[char] = &[
    '"', '+', '-', '!', '¡', '/', '&', '%', '#', '}', '{', '_', '*',
];

pub const SPANISH_NEGATORS: &[&str] = &[
    "no", "nunca", "jamás", "jamas", "ni", "tampoco", "nada", "nadie", "ningún", "ninguna",
    "ninguno", "sin",
];

pub const SPANISH_POSITIVE_WORDS: &[&str] = &[
    "bueno", "buena", "buenos", "buenas", "bien", "mejor", "mejores", "excelente",
    "excelentes", "genial", "increíble", "maravilloso", "maravillosa", "fantástico",
    "fantástica", "feliz", "felices", "alegría", "alegre", "amor", "encanta", "gusta",
    "gracias", "éxito", "exitoso", "exitosa", "logro", "logros", "avance", "avances",
    "apoyo", "apoyamos", "apoya", "favor", "favorable", "positivo", "positiva", "justo",
    "justa", "justicia", "honesto", "honesta", "transparente", "transparencia", "confianza",
    "esperanza", "orgullo", "orgulloso", "orgullosa", "beneficio", "beneficios", "benéfico",
    "progreso", "crecimiento", "seguro", "segura", "seguridad", "fuerte", "libre",
    "libertad", "democracia", "democrático", "democrática", "bravo", "felicidades",
    "felicitaciones", "acierto", "correcto", "correcta", "útil", "eficaz", "eficiente",
    "valiente", "digno", "digna", "respeto", "bienestar", "paz", "unidad", "ganar", "gana",
    "ganamos", "victoria", "celebrar", "celebramos", "aplauso", "aplausos", "admirable",
];

pub const SPANISH_NEGATIVE_WORDS: &[&str] = &[
    "malo", "mala", "malos", "malas", "mal", "peor", "peores", "terrible", "terribles",
    "horrible", "pésimo", "pésima", "triste", "tristeza", "odio", "odia", "miedo", "enojo",
    "coraje", "vergüenza", "vergonzoso", "vergonzosa", "fracaso", "fracasó", "falla",
    "fallas", "error", "errores", "problema", "problemas", "crisis", "corrupto", "corrupta",
    "corruptos", "corrupción", "robo", "roba", "roban", "ladrón", "ladrones", "mentira",
    "mentiras", "miente", "mienten", "mentiroso", "mentirosa", "fraude", "injusto", "injusta",
    "injusticia", "abuso", "abusos", "violencia", "inseguridad", "peligro", "peligroso",
    "peligrosa", "destruye", "destruir", "daño", "daños", "dañino", "pobreza", "desastre",
    "caos", "retroceso", "autoritario", "autoritaria", "dictadura", "ilegal",
    "inconstitucional", "traición", "traidor", "traidores", "absurdo", "absurda", "ridículo",
    "ridícula", "inútil", "incompetente", "rechazo", "rechazamos", "contra", "protesta",
    "amenaza", "amenazas", "asco", "basura", "muerte", "muertos", "perder", "pierde",
    "perdimos", "derrota",
];

pub const ENGLISH_NEGATORS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "nothing", "nobody", "none", "without", "don't",
    "doesn't", "isn't", "wasn't", "aren't", "won't", "can't", "cannot",
];

pub const ENGLISH_POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "superb",
    "outstanding", "brilliant", "love", "loved", "best", "better", "positive", "happy", "joy",
    "beautiful", "perfect", "awesome", "incredible", "pleasant", "success", "successful",
    "win", "winning", "helpful", "reliable", "fair", "honest", "hope", "proud", "progress",
    "safe", "strong", "free", "freedom", "support", "thanks", "congratulations", "benefit",
];

pub const ENGLISH_NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "poor", "worst", "worse", "hate", "sad",
    "angry", "failure", "failed", "fail", "problem", "problems", "crisis", "corrupt",
    "corruption", "lie", "lies", "liar", "fraud", "unfair", "abuse", "violence", "danger",
    "dangerous", "disaster", "chaos", "illegal", "shame", "useless", "incompetent",
    "threat", "against", "lose", "lost", "wrong", "fear", "broken",
];
