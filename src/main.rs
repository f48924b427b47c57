fn main() {
    println!("varcipher walkthrough");
    println!("=====================");

    // 1. Latin alphabet, default single-space separator
    println!("\n1. Basic encode/decode:");

    let cipher = varcipher::Cipher::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
    let keyword = "LEMON";
    let plaintext = "ATTACK AT DAWN";

    let ciphertext = cipher.encode(plaintext, keyword);
    println!("  plaintext:  {}", plaintext);
    println!("  keyword:    {}", keyword);
    println!("  ciphertext: {}", ciphertext);

    let decoded = cipher.decode(&ciphertext, keyword);
    println!("  decoded:    {}", decoded);
    println!(
        "  round-trip: {}",
        if decoded == plaintext { "✓" } else { "✗" }
    );

    // 2. The substitution table behind that keyword
    println!("\n2. Table layout:");

    let alphabet = varcipher::to_codepoints(&cipher.alphabet());
    let key = varcipher::reduce_key(&varcipher::to_codepoints(keyword), &alphabet);
    let table = varcipher::build_table(&alphabet, &key);

    println!("  reduced key: {}", varcipher::to_utf8(&key));
    println!("  shape: {} rows x {} cols", table.rows(), table.cols());
    for i in 0..table.rows() {
        let row: String = (0..table.cols())
            .map(|j| table.symbol_at(i, j).unwrap_or('·'))
            .collect();
        let [a, b] = table.row_keys[i];
        println!("  [{}{}] {}", a, b, row);
    }

    // 3. Homophones: the same letter encodes differently each time
    println!("\n3. Homophone cycling:");

    let repeated = cipher.encode("AAAA", keyword);
    println!("  AAAA -> {}", repeated);

    // 4. Russian mode: fold case before encoding
    println!("\n4. Russian alphabet with case folding:");

    let russian = varcipher::Cipher::new(varcipher::alphabet::RUSSIAN).unwrap();
    let text = varcipher::fold_upper_str("Вариантный шифр");
    let kw = varcipher::fold_upper_str("ключ");

    let ct = russian.encode(&text, &kw);
    println!("  folded text: {}", text);
    println!("  ciphertext:  {}", ct);
    println!("  decoded:     {}", russian.decode(&ct, &kw));

    // 5. Configuration is replaceable state
    println!("\n5. Reconfiguration:");

    let mut custom = varcipher::Cipher::new("ABCDEFGHIJKLMNOP").unwrap();
    custom.set_separator("·");
    let ct = custom.encode("BADGE", "CAB");
    println!("  separator '·': {}", ct);
    println!("  decoded:       {}", custom.decode(&ct, "CAB"));

    match varcipher::Cipher::new("") {
        Ok(_) => println!("  empty alphabet ✗ unexpectedly accepted"),
        Err(e) => println!("  empty alphabet ✓ rejected: {}", e),
    }
}
