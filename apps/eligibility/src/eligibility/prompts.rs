// Eligibility prompt templates.
// The section labels in ELIGIBILITY_PROMPT_TEMPLATE are the parser's wire
// format; keep them in sync with `analysis::*_HEADER` and `VERDICT_LABEL`.

use crate::llm_client::prompts::{FUNDING_EXPERT_SYSTEM, PLAIN_TEXT_INSTRUCTION};
use crate::models::company::CompanySnapshot;
use crate::models::program::FundingProgram;

pub const ELIGIBILITY_SYSTEM: &str = FUNDING_EXPERT_SYSTEM;

/// Replace: {company_data}, {program_title}, {eligibility_rules}, {format_instruction}
pub const ELIGIBILITY_PROMPT_TEMPLATE: &str = r#"Ești un expert în finanțări europene pentru companii românești. Analizează această companie română în raport cu FIECARE criteriu specific de eligibilitate.

DATELE COMPANIEI:
{company_data}

PROGRAMUL: {program_title}

CRITERIILE DE ELIGIBILITATE DE VERIFICAT:
{eligibility_rules}

INSTRUCȚIUNI:
1. Verifică FIECARE criteriu individual în raport cu datele companiei.
2. Clasifică fiecare criteriu într-una dintre categorii:
   - ACCEPTATE: compania îndeplinește clar cerința
   - REFUZATE: compania NU îndeplinește clar cerința
   - NEVALIDATE: cerința nu poate fi verificată din datele disponibile
3. Dacă o categorie nu are niciun criteriu, lasă-o goală. NU scrie rânduri de tipul "nu există criterii refuzate".
4. {format_instruction}
5. Răspunde EXCLUSIV în limba română, folosind EXACT acest format:

ACCEPTATE:
- [Criteriul]: [Explicație cu datele concrete ale companiei care susțin decizia]

REFUZATE:
- [Criteriul]: [Explicație cu datele concrete ale companiei care justifică refuzul]

NEVALIDATE:
- [Criteriul]: [Ce informații lipsesc pentru validare]

DECIZIA FINALĂ:
- Dacă ORICARE criteriu este REFUZAT: compania NU este eligibilă
- Altfel (doar ACCEPTATE, sau ACCEPTATE și NEVALIDATE): compania este eligibilă

Încheie cu exact una dintre liniile:
REZULTAT: ELIGIBILĂ
REZULTAT: NU_ESTE_ELIGIBILĂ"#;

pub fn build_eligibility_prompt(company: &CompanySnapshot, program: &FundingProgram) -> String {
    let rules = match program.company_rules() {
        "" => "Programul nu specifică criterii de eligibilitate pentru companie.",
        rules => rules,
    };

    ELIGIBILITY_PROMPT_TEMPLATE
        .replace("{company_data}", &format_company_data(company))
        .replace("{program_title}", &program.title)
        .replace("{eligibility_rules}", rules.trim())
        .replace("{format_instruction}", PLAIN_TEXT_INSTRUCTION)
}

/// Company attributes as a Romanian bullet list.
pub fn format_company_data(company: &CompanySnapshot) -> String {
    [
        format!("- Denumirea companiei: {}", company.company_name()),
        format!("- CUI: {}", company.tax_code),
        format!("- Statut: {}", company.status),
        format!("- Forma juridică: {}", company.legal_form),
        format!("- Codul NACE: {}", company.nace),
        format!("- Numărul de angajați: {}", company.employees),
        format!("- Cifra de afaceri: {} lei", company.turnover),
        format!("- Profitul: {} lei", company.profit),
        format!("- Locația: {}, {}", company.county, company.city),
        format!("- Data înregistrării: {}", company.registration_date),
        format!("- Activitatea fiscală: {}", company.fiscal_activity),
    ]
    .join("\n")
}
