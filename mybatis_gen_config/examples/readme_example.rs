//! Example matching the README: a settings document using every option.
//!
//! Contains only the input settings and the conversion logic; the generated
//! XML configuration is written to stdout.

use std::io;

const SETTINGS_YAML: &str = "
mybatisGenerator:
  targetRuntime: MyBatis3
  plugins:
    comment: true
    lombok: true
    swagger: true
    serializable: true
    mapperAnnotation: true
  datasource:
    type: mysql
    address: localhost:3306
    db: shop
    username: root
    password: secret
  java8: true
  targetPackage:
    model: com.example.shop.model
    mapper: com.example.shop.mapper
    xmlmapper: mapper
    javaXmlFilesSamePackage: false
  mapperSuffixName: Mapper
  disableExample: true
  tables:
    - user_account
    - order_item
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout: io::Stdout = io::stdout();
    mybatis_gen_config::generate_to_writer(SETTINGS_YAML, &mut stdout)?;
    Ok(())
}
