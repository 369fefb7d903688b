//! Bundled generators built from the default snippet catalog

use crate::generator::{FieldTable, GenerationContext, GeneratorRegistry};

/// User field (`CUserTypeEntity`) creation script
pub const UF: &str = "uf";
/// Iblock property (`CIBlockProperty`) creation script
pub const IBPROP: &str = "ibprop";
/// Mail event type plus mail template creation script
pub const MEVENT: &str = "mevent";

const EMPTY_LANG_ARRAY: &str = "array('ru' => '', 'en' => '')";

/// Register [`UF`], [`IBPROP`] and [`MEVENT`]
pub fn register_default_generators(registry: &mut GeneratorRegistry) {
    registry.register(UF, generate_uf_template);
    registry.register(IBPROP, generate_ibprop_template);
    registry.register(MEVENT, generate_mevent_template);
}

pub fn generate_uf_template(ctx: &GenerationContext<'_>) -> String {
    let fields = FieldTable::new()
        .quoted("ENTITY_ID", "")
        .quoted("FIELD_NAME", "_field_name_")
        .field("SORT", "500")
        .quoted("XML_ID", "")
        .quoted("USER_TYPE_ID", "string")
        .quoted("SHOW_FILTER", "N")
        .quoted("MULTIPLE", "N")
        .quoted("MANDATORY", "N")
        .quoted("SHOW_IN_LIST", "N")
        .quoted("EDIT_IN_LIST", "N")
        .quoted("IS_SEARCHABLE", "N")
        .field("EDIT_FORM_LABEL", EMPTY_LANG_ARRAY)
        .field("LIST_COLUMN_LABEL", EMPTY_LANG_ARRAY)
        .field("LIST_FILTER_LABEL", EMPTY_LANG_ARRAY)
        .field("ERROR_MESSAGE", EMPTY_LANG_ARRAY)
        .field("HELP_MESSAGE", EMPTY_LANG_ARRAY)
        .field("SETTINGS", "array()");

    ctx.writer()
        .snippets(&["php", "bxheader", "uf_obj", "uf_data_st"])
        .fields(1, &fields)
        .snippets(&["uf_data_en", "uf_data_run", "uf_data_check", "done"])
        .finish()
}

pub fn generate_ibprop_template(ctx: &GenerationContext<'_>) -> String {
    let fields = FieldTable::new()
        .quoted("IBLOCK_ID", "_0_")
        .quoted("NAME", "_name_")
        .quoted("ACTIVE", "Y")
        .field("SORT", "500")
        .quoted("CODE", "_code_")
        .field("ROW_COUNT", "1")
        .field("COL_COUNT", "30")
        .quoted("XML_ID", "")
        .quoted("DEFAULT_VALUE", "")
        .quoted("PROPERTY_TYPE", "S")
        .quoted("LIST_TYPE", "C")
        .quoted("LINK_IBLOCK_ID", "0")
        .quoted("MULTIPLE", "N")
        .quoted("WITH_DESCRIPTION", "N")
        .quoted("SEARCHABLE", "N")
        .quoted("FILTRABLE", "N")
        .quoted("IS_REQUIRED", "N")
        // filled in by Bitrix itself
        .field("VERSION", "2")
        .field("USER_TYPE", "false")
        .field("USER_TYPE_SETTINGS", "false")
        .quoted("HINT", "");

    ctx.writer()
        .snippets(&["php", "bxheader", "iblock", "ibp_obj", "iblock_prop_st"])
        .fields(1, &fields)
        .snippets(&[
            "iblock_prop_en",
            "iblock_prop_run",
            "iblock_prop_check",
            "done",
        ])
        .finish()
}

/// The mail template is only created when the event type was added, so its
/// block sits one level deeper, inside the success branch.
pub fn generate_mevent_template(ctx: &GenerationContext<'_>) -> String {
    let event_fields = FieldTable::new()
        .quoted("EVENT_NAME", "_event_name_")
        .quoted("LID", "ru")
        .quoted("NAME", "_name_")
        .quoted("DESCRIPTION", "_descr_")
        .field("SORT", "150");

    let template_fields = FieldTable::new()
        .quoted("EVENT_NAME", "_event_name_")
        .quoted("LID", "_SID_")
        .quoted("ACTIVE", "Y")
        .quoted("EMAIL_FROM", "#DEFAULT_EMAIL_FROM#")
        .quoted("EMAIL_TO", "#EMAIL_TO#")
        .quoted("SUBJECT", "#SUBJECT#")
        .quoted("BODY_TYPE", "text")
        .quoted("MESSAGE", "Message here with #MACROS#");

    ctx.writer()
        .snippets(&["php", "bxheader", "mevent_obj", "mevent_data_st"])
        .fields(1, &event_fields)
        .snippets(&[
            "mevent_data_en",
            "mevent_run",
            "mevent_run_check",
            "mevent_succ",
        ])
        .indented_snippets(1, &["mtpl_obj", "mtpl_data_st", "mtpl_warn"])
        .fields(2, &template_fields)
        .indented_snippets(1, &["mtpl_data_en", "mtpl_run"])
        .snippets(&["mtpl_run_check", "mevent_run_check_else", "done"])
        .finish()
}
