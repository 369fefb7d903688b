//! Default snippet catalog

use crate::config::CodegenConfig;
use crate::snippet::SnippetRegistry;

/// `if ($r) { ... } else { ... }` block reporting the result of an `add` call
fn result_check(lb: &str, ind: &str, entity: &str, object: &str) -> String {
    format!(
        "if ($r) {{ {lb}{ind}echo 'Added {entity} with ID: ' . $r . PHP_EOL; {lb}}} else {{ {lb}\
         {ind}echo 'Error adding {entity}: ' . ${object}->LAST_ERROR  . PHP_EOL; {lb}}}"
    )
}

/// Populate `registry` with the default catalog
///
/// Multi-line snippets are built with the line break and indent from
/// `config` as they are at call time.
pub fn add_default_snippets(registry: &mut SnippetRegistry, config: &CodegenConfig) {
    let lb = config.line_break.as_str();
    let ind = config.indent.as_str();

    // common
    registry.add("php", "<?php");
    registry.add("path", "$_SERVER['DOCUMENT_ROOT'] = dirname(__FILE__);");
    registry.add(
        "bxheader",
        "require_once($_SERVER['DOCUMENT_ROOT'] . '/bitrix/modules/main/include/prolog_before.php');",
    );

    // iblock properties
    registry.add("iblock", "\\Bitrix\\Main\\Loader::includeModule('iblock');");
    registry.add("ibp_obj", "$ibp = new CIBlockProperty();");
    registry.add("iblock_prop_st", "$prop = array(");
    registry.add("iblock_prop_en", ");");
    registry.add("iblock_prop_run", "$r = $ibp->add($prop);");
    registry.add("iblock_prop_check", result_check(lb, ind, "prop", "ibp"));

    // user fields
    registry.add("uf_obj", "$ufo = new CUserTypeEntity;");
    registry.add("uf_data_st", "$uf = array(");
    registry.add("uf_data_en", ");");
    registry.add("uf_data_run", "$r = $ufo->add($uf);");
    registry.add("uf_data_check", result_check(lb, ind, "UserField", "ufo"));

    // mail events
    registry.add("mevent_obj", "$meo = new CEventType;");
    registry.add("mevent_data_st", "$me = array(");
    registry.add("mevent_data_en", ");");
    registry.add("mevent_run", "$r = $meo->add($me);");
    registry.add("mevent_run_succ_wo_mm", result_check(lb, ind, "MailEvent", "meo"));
    registry.add("mevent_run_check", "if ($r) {");
    registry.add(
        "mevent_run_check_else",
        format!(
            "}} else {{{lb}{ind}echo 'Error adding MailEvent: ' . $meo->LAST_ERROR  . PHP_EOL; {lb}}}"
        ),
    );
    registry.add(
        "mevent_succ",
        format!("{ind}echo 'Added MailEvent with ID: ' . $r . PHP_EOL;{lb}"),
    );

    // mail templates, nested inside the mail event success branch
    registry.add("mtpl_warn", format!("{ind}// TODO - set proper LID for template!"));
    registry.add("mtpl_obj", "$mmo = new CEventMessage;");
    registry.add("mtpl_data_st", "$mm = array(");
    registry.add("mtpl_data_en", ");");
    registry.add("mtpl_run", "$r = $mmo->add($mm);");
    registry.add(
        "mtpl_run_check",
        format!(
            "{ind}if ($r) {{{lb}\
             {ind}{ind}echo 'Added MailTemplate with ID: ' . $r . PHP_EOL;{lb}\
             {ind}}} else {{{lb}\
             {ind}{ind}echo 'Error adding MailTemplate: ' . $mmo->LAST_ERROR  . PHP_EOL;{lb}\
             {ind}}}"
        ),
    );

    registry.add("done", "echo 'Done!' . PHP_EOL;");
}
