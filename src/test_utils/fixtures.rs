/// Pre-order names of [`create_plan_document`](crate::sample::create_plan_document)'s tree.
pub const PLAN_ENTITY_LIST: [&str; 15] = [
    "plano",
    "curso",
    "fuc",
    "nome",
    "ects",
    "avaliacao",
    "componente",
    "componente",
    "fuc",
    "nome",
    "ects",
    "avaliacao",
    "componente",
    "componente",
    "componente",
];

/// Expected `global_print_xpath("fuc/avaliacao/componente")` on the plan.
pub const PLAN_XPATH_COMPONENTS: &str = "<componente nome=\"Quizzes\" peso=\"20%\"/>\n\
<componente nome=\"Projeto\" peso=\"80%\"/>\n\
<componente nome=\"Dissertação\" peso=\"60%\"/>\n\
<componente nome=\"Apresentação\" peso=\"20%\"/>\n\
<componente nome=\"Discussão\" peso=\"20%\"/>";
