mod square;
