//! End-to-end tests for snippet registration and generator dispatch

use pretty_assertions::assert_eq;

use snipgen::{
    enclose_in_single_quotes, with_defaults, Codegen, CodegenConfig, CodegenError, FieldTable,
    GenerationContext,
};

const BXHEADER: &str =
    "require_once($_SERVER['DOCUMENT_ROOT'] . '/bitrix/modules/main/include/prolog_before.php');";

fn quick_echo(ctx: &GenerationContext) -> String {
    let mut out = String::new();
    out.push_str(ctx.snippet_or_empty("php_quick_echo"));
    out.push_str(&enclose_in_single_quotes("123-321"));
    out.push_str(ctx.snippet_or_empty("php_closing_tag"));
    out
}

fn script(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[test]
fn test_quick_echo_generator() {
    let mut codegen = Codegen::new();
    codegen.add_snippet("php_quick_echo", "<?=");
    codegen.add_snippet("php_closing_tag", "?>");
    codegen.register_generator("qe_script", quick_echo);

    let out = codegen.generate("qe_script").expect("Should generate");
    insta::assert_snapshot!(out, @"<?='123-321'?>");
}

#[test]
fn test_generate_matches_direct_call() {
    let mut codegen = Codegen::new();
    codegen.add_snippet("php_quick_echo", "<?=");
    codegen.register_generator("qe_script", quick_echo);

    let direct = quick_echo(&codegen.context());
    assert_eq!(codegen.generate("qe_script"), Ok(direct));
}

#[test]
fn test_missing_snippet_is_omitted() {
    let mut codegen = Codegen::new();
    codegen.add_snippet("php_closing_tag", "?>");
    codegen.register_generator("qe_script", quick_echo);

    assert_eq!(codegen.generate("qe_script"), Ok("'123-321'?>".to_string()));
}

#[test]
fn test_default_generators_dispatch() {
    let mut codegen = Codegen::new();
    codegen.register_default_generators();

    assert!(codegen.generate("uf").is_ok());
    assert!(codegen.generate("ibprop").is_ok());
    assert_eq!(
        codegen.generate("non_ex_g"),
        Err(CodegenError::GeneratorNotFound {
            name: "non_ex_g".to_string()
        })
    );
}

#[test]
fn test_default_snippet_lookup() {
    let mut codegen = Codegen::new();
    codegen.add_default_snippets();
    assert_eq!(codegen.get_snippet("mevent_obj"), Ok("$meo = new CEventType;"));
}

#[test]
fn test_default_snippets_ignore_later_config_changes() {
    let mut codegen = Codegen::new();
    codegen.add_default_snippets();
    codegen.set_indent("\t");
    codegen.set_line_break("\r\n");

    assert_eq!(
        codegen.get_snippet("mevent_succ"),
        Ok("    echo 'Added MailEvent with ID: ' . $r . PHP_EOL;\n")
    );
}

#[test]
fn test_resnippet_overwrites() {
    let mut codegen = Codegen::new();
    codegen.add_snippet("done", "first");
    codegen.add_snippet("done", "second");
    assert_eq!(codegen.get_snippet("done"), Ok("second"));
    assert_eq!(codegen.snippets().len(), 1);
}

#[test]
fn test_uf_script() {
    let codegen = with_defaults(CodegenConfig::default());
    let out = codegen.generate("uf").expect("Should generate");

    let expected = script(&[
        "<?php",
        BXHEADER,
        "$ufo = new CUserTypeEntity;",
        "$uf = array(",
        "    'ENTITY_ID' => '',",
        "    'FIELD_NAME' => '_field_name_',",
        "    'SORT' => 500,",
        "    'XML_ID' => '',",
        "    'USER_TYPE_ID' => 'string',",
        "    'SHOW_FILTER' => 'N',",
        "    'MULTIPLE' => 'N',",
        "    'MANDATORY' => 'N',",
        "    'SHOW_IN_LIST' => 'N',",
        "    'EDIT_IN_LIST' => 'N',",
        "    'IS_SEARCHABLE' => 'N',",
        "    'EDIT_FORM_LABEL' => array('ru' => '', 'en' => ''),",
        "    'LIST_COLUMN_LABEL' => array('ru' => '', 'en' => ''),",
        "    'LIST_FILTER_LABEL' => array('ru' => '', 'en' => ''),",
        "    'ERROR_MESSAGE' => array('ru' => '', 'en' => ''),",
        "    'HELP_MESSAGE' => array('ru' => '', 'en' => ''),",
        "    'SETTINGS' => array(),",
        ");",
        "$r = $ufo->add($uf);",
        "if ($r) { ",
        "    echo 'Added UserField with ID: ' . $r . PHP_EOL; ",
        "} else { ",
        "    echo 'Error adding UserField: ' . $ufo->LAST_ERROR  . PHP_EOL; ",
        "}",
        "echo 'Done!' . PHP_EOL;",
    ]);
    assert_eq!(out, expected);
}

#[test]
fn test_mevent_script() {
    let codegen = with_defaults(CodegenConfig::default());
    let out = codegen.generate("mevent").expect("Should generate");

    let expected = script(&[
        "<?php",
        BXHEADER,
        "$meo = new CEventType;",
        "$me = array(",
        "    'EVENT_NAME' => '_event_name_',",
        "    'LID' => 'ru',",
        "    'NAME' => '_name_',",
        "    'DESCRIPTION' => '_descr_',",
        "    'SORT' => 150,",
        ");",
        "$r = $meo->add($me);",
        "if ($r) {",
        "    echo 'Added MailEvent with ID: ' . $r . PHP_EOL;",
        "",
        "    $mmo = new CEventMessage;",
        "    $mm = array(",
        "        // TODO - set proper LID for template!",
        "        'EVENT_NAME' => '_event_name_',",
        "        'LID' => '_SID_',",
        "        'ACTIVE' => 'Y',",
        "        'EMAIL_FROM' => '#DEFAULT_EMAIL_FROM#',",
        "        'EMAIL_TO' => '#EMAIL_TO#',",
        "        'SUBJECT' => '#SUBJECT#',",
        "        'BODY_TYPE' => 'text',",
        "        'MESSAGE' => 'Message here with #MACROS#',",
        "    );",
        "    $r = $mmo->add($mm);",
        "    if ($r) {",
        "        echo 'Added MailTemplate with ID: ' . $r . PHP_EOL;",
        "    } else {",
        "        echo 'Error adding MailTemplate: ' . $mmo->LAST_ERROR  . PHP_EOL;",
        "    }",
        "} else {",
        "    echo 'Error adding MailEvent: ' . $meo->LAST_ERROR  . PHP_EOL; ",
        "}",
        "echo 'Done!' . PHP_EOL;",
    ]);
    assert_eq!(out, expected);
}

#[test]
fn test_output_is_reproducible() {
    let codegen = with_defaults(CodegenConfig::default());
    for name in ["uf", "ibprop", "mevent"] {
        let first = codegen.generate(name).expect("Should generate");
        let second = codegen.generate(name).expect("Should generate");
        assert_eq!(first, second);
    }
}

#[test]
fn test_custom_generator_with_field_table() {
    let mut codegen = Codegen::with_config(CodegenConfig::new().with_indent("  "));
    codegen.add_snippet("open", "$cfg = array(");
    codegen.add_snippet("close", ");");
    codegen.register_generator("cfg", |ctx: &GenerationContext| {
        let fields = FieldTable::new().quoted("HOST", "localhost").field("PORT", "80");
        ctx.writer()
            .snippets(&["open"])
            .fields(1, &fields)
            .snippets(&["close"])
            .finish()
    });

    assert_eq!(
        codegen.generate("cfg"),
        Ok(script(&[
            "$cfg = array(",
            "  'HOST' => 'localhost',",
            "  'PORT' => 80,",
            ");"
        ]))
    );
}
